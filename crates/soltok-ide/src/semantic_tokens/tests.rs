use expect_test::{Expect, expect};
use proptest::prelude::*;
use serde_json::{Value, json};
use soltok_inputs::{LineIndex, PositionEncoding};
use soltok_syntax::{TextRange, load, source_unit_from_value};

use super::{BuildError, SemanticTokens, SemanticTokensBuilder, SemanticTokensConfig, TokenPosition};
use crate::TokenModifiers;

/// Source text of a test plus helpers locating `src` ranges in it.
struct Fixture {
    text: &'static str,
}

impl Fixture {
    /// `src` of the `nth` occurrence of `needle`. Identifier-like edges of
    /// `needle` only match at identifier boundaries.
    #[track_caller]
    fn src(&self, needle: &str, nth: usize) -> String {
        let start = self.find(needle, nth);
        format!("{start}:{}:0", needle.len())
    }

    /// `src` from the first occurrence of `first` to the end of the last
    /// occurrence of `last`.
    #[track_caller]
    fn span(&self, first: &str, last: &str) -> String {
        let start = self.find(first, 0);
        let end = self.text.rfind(last).unwrap() + last.len();
        format!("{start}:{}:0", end - start)
    }

    /// Empty `src` right after the `nth` occurrence of `needle`.
    #[track_caller]
    fn after(&self, needle: &str, nth: usize) -> String {
        format!("{}:0:0", self.find(needle, nth) + needle.len())
    }

    #[track_caller]
    fn find(&self, needle: &str, nth: usize) -> usize {
        let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
        let first_is_ident = needle.chars().next().is_some_and(is_ident);
        let last_is_ident = needle.chars().next_back().is_some_and(is_ident);

        self.text
            .match_indices(needle)
            .map(|(start, _)| start)
            .filter(|&start| {
                let before = self.text[..start].chars().next_back();
                let after = self.text[start + needle.len()..].chars().next();
                !(first_is_ident && before.is_some_and(is_ident))
                    && !(last_is_ident && after.is_some_and(is_ident))
            })
            .nth(nth)
            .unwrap_or_else(|| panic!("no occurrence {nth} of `{needle}`"))
    }

    fn unit(&self, nodes: Vec<Value>) -> Value {
        json!({
            "nodeType": "SourceUnit",
            "id": 0,
            "src": format!("0:{}:0", self.text.len()),
            "absolutePath": "test.sol",
            "nodes": nodes,
        })
    }

    fn elementary(&self, name: &str, nth: usize) -> Value {
        json!({ "nodeType": "ElementaryTypeName", "src": self.src(name, nth), "name": name })
    }

    fn identifier(&self, name: &str, nth: usize, referenced: i64) -> Value {
        json!({
            "nodeType": "Identifier",
            "src": self.src(name, nth),
            "name": name,
            "referencedDeclaration": referenced,
        })
    }

    fn literal(&self, value: &str, nth: usize, kind: &str) -> Value {
        json!({ "nodeType": "Literal", "src": self.src(value, nth), "kind": kind, "value": value })
    }

    fn build(&self, unit: Value) -> Result<SemanticTokens, BuildError> {
        build(self.text, unit, PositionEncoding::Utf16)
    }

    #[track_caller]
    fn check(&self, nodes: Vec<Value>, expect: Expect) {
        let tokens = self.build(self.unit(nodes)).unwrap();
        expect.assert_eq(&render(self.text, &tokens));
    }
}

fn build(
    text: &str,
    unit: Value,
    encoding: PositionEncoding,
) -> Result<SemanticTokens, BuildError> {
    let unit = source_unit_from_value(unit).unwrap();
    let line_index = LineIndex::new(text);
    SemanticTokensBuilder::new(SemanticTokensConfig { position_encoding: encoding })
        .build(&unit, text, &line_index)
}

/// One decoded token per line, followed by the text it covers. Columns are
/// only sliced correctly for ASCII text.
fn render(text: &str, tokens: &SemanticTokens) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    tokens
        .decode()
        .iter()
        .map(|token| {
            let start = token.start as usize;
            let lexeme = lines[token.line as usize].get(start..start + token.length as usize);
            format!("{token} {:?}\n", lexeme.unwrap_or("?"))
        })
        .collect()
}

#[test]
fn constant_declaration() {
    let f = Fixture { text: "uint256 constant X = 1;" };
    let unit = f.unit(vec![json!({
        "nodeType": "VariableDeclaration",
        "id": 1,
        "src": f.span("uint256", "1"),
        "name": "X",
        "nameLocation": f.src("X", 0),
        "constant": true,
        "mutability": "constant",
        "typeName": f.elementary("uint256", 0),
        "value": f.literal("1", 0, "number"),
    })]);

    let tokens = f.build(unit).unwrap();
    assert_eq!(tokens.data(), [0, 0, 7, 17, 0, 0, 17, 1, 19, 64, 0, 4, 1, 11, 0]);
    expect![[r#"
        0:0 +7 type "uint256"
        0:17 +1 variable [readonly] "X"
        0:21 +1 number "1"
    "#]]
    .assert_eq(&render(f.text, &tokens));
}

#[test]
fn empty_document() {
    let f = Fixture { text: "" };
    let tokens = f.build(f.unit(Vec::new())).unwrap();
    assert!(tokens.is_empty());
    assert_eq!(tokens.data(), [] as [u32; 0]);
}

#[test]
fn declarations_on_the_same_and_next_line() {
    let f = Fixture { text: "enum A { X } enum B { Y }\nenum C { Z }" };
    let enumeration = |id: i64, name: &str, member: &str| {
        json!({
            "nodeType": "EnumDefinition",
            "id": id,
            "src": f.span(&format!("enum {name}"), &format!("{member} }}")),
            "name": name,
            "nameLocation": f.src(name, 0),
            "members": [{
                "nodeType": "EnumValue",
                "id": id + 1,
                "src": f.src(member, 0),
                "name": member,
                "nameLocation": f.src(member, 0),
            }],
        })
    };
    let unit = f.unit(vec![
        enumeration(1, "A", "X"),
        enumeration(3, "B", "Y"),
        enumeration(5, "C", "Z"),
    ]);

    let tokens = f.build(unit).unwrap();
    assert_eq!(
        tokens.data(),
        [
            0, 5, 1, 2, 2, //
            0, 4, 1, 3, 64, //
            0, 9, 1, 2, 2, //
            0, 4, 1, 3, 64, //
            1, 5, 1, 2, 2, //
            0, 4, 1, 3, 64,
        ]
    );
}

#[test]
fn contract() {
    let f = Fixture {
        text: r#"pragma solidity ^0.8.0;

interface Base {}
/// @title Counter
abstract contract Counter is Base {
    struct Entry { uint256 value; }
    uint256 public count;
    event Bumped(address indexed by);
    modifier onlyOwner() { _; }
    function bump(uint256 step) external onlyOwner returns (uint256) {
        count += step;
        emit Bumped(msg.sender);
        return count;
    }
    function peek() public view virtual returns (bool);
}"#,
    };

    let bump = json!({
        "nodeType": "FunctionDefinition",
        "id": 9,
        "src": f.span("function bump", "return count;\n    }"),
        "name": "bump",
        "nameLocation": f.src("bump", 0),
        "kind": "function",
        "parameters": {
            "nodeType": "ParameterList",
            "src": f.src("(uint256 step)", 0),
            "parameters": [{
                "nodeType": "VariableDeclaration",
                "id": 10,
                "src": f.src("uint256 step", 0),
                "name": "step",
                "nameLocation": f.src("step", 0),
                "typeName": f.elementary("uint256", 2),
            }],
        },
        "modifiers": [{
            "nodeType": "ModifierInvocation",
            "src": f.src("onlyOwner", 1),
            "modifierName": {
                "nodeType": "IdentifierPath",
                "src": f.src("onlyOwner", 1),
                "name": "onlyOwner",
                "referencedDeclaration": 8,
            },
        }],
        "returnParameters": {
            "nodeType": "ParameterList",
            "src": f.src("(uint256)", 0),
            "parameters": [{
                "nodeType": "VariableDeclaration",
                "id": 11,
                "src": f.src("uint256", 3),
                "name": "",
                "typeName": f.elementary("uint256", 3),
            }],
        },
        "body": {
            "nodeType": "Block",
            "src": f.span("{\n        count", "return count;\n    }"),
            "statements": [
                {
                    "nodeType": "ExpressionStatement",
                    "src": f.src("count += step", 0),
                    "expression": {
                        "nodeType": "Assignment",
                        "src": f.src("count += step", 0),
                        "operator": "+=",
                        "leftHandSide": f.identifier("count", 1, 5),
                        "rightHandSide": f.identifier("step", 1, 10),
                    },
                },
                {
                    "nodeType": "EmitStatement",
                    "src": f.src("emit Bumped(msg.sender);", 0),
                    "eventCall": {
                        "nodeType": "FunctionCall",
                        "src": f.src("Bumped(msg.sender)", 0),
                        "expression": f.identifier("Bumped", 1, 6),
                        "arguments": [{
                            "nodeType": "MemberAccess",
                            "src": f.src("msg.sender", 0),
                            "memberName": "sender",
                            "memberLocation": f.src("sender", 0),
                            "expression": f.identifier("msg", 0, -15),
                        }],
                    },
                },
                {
                    "nodeType": "Return",
                    "src": f.src("return count;", 0),
                    "expression": f.identifier("count", 2, 5),
                },
            ],
        },
    });

    let counter = json!({
        "nodeType": "ContractDefinition",
        "id": 2,
        "src": f.span("abstract contract", "}"),
        "name": "Counter",
        "nameLocation": f.src("Counter", 1),
        "contractKind": "contract",
        "abstract": true,
        "documentation": {
            "nodeType": "StructuredDocumentation",
            "src": f.src("/// @title Counter", 0),
            "text": "@title Counter",
        },
        "baseContracts": [{
            "nodeType": "InheritanceSpecifier",
            "src": f.src("Base", 1),
            "baseName": {
                "nodeType": "IdentifierPath",
                "src": f.src("Base", 1),
                "name": "Base",
                "referencedDeclaration": 1,
            },
        }],
        "nodes": [
            {
                "nodeType": "StructDefinition",
                "id": 3,
                "src": f.src("struct Entry { uint256 value; }", 0),
                "name": "Entry",
                "nameLocation": f.src("Entry", 0),
                "members": [{
                    "nodeType": "VariableDeclaration",
                    "id": 4,
                    "src": f.src("uint256 value", 0),
                    "name": "value",
                    "nameLocation": f.src("value", 0),
                    "typeName": f.elementary("uint256", 0),
                }],
            },
            {
                "nodeType": "VariableDeclaration",
                "id": 5,
                "src": f.src("uint256 public count", 0),
                "name": "count",
                "nameLocation": f.src("count", 0),
                "stateVariable": true,
                "mutability": "mutable",
                "typeName": f.elementary("uint256", 1),
            },
            {
                "nodeType": "EventDefinition",
                "id": 6,
                "src": f.src("event Bumped(address indexed by);", 0),
                "name": "Bumped",
                "nameLocation": f.src("Bumped", 0),
                "parameters": {
                    "nodeType": "ParameterList",
                    "src": f.src("(address indexed by)", 0),
                    "parameters": [{
                        "nodeType": "VariableDeclaration",
                        "id": 7,
                        "src": f.src("address indexed by", 0),
                        "name": "by",
                        "nameLocation": f.src("by", 0),
                        "typeName": f.elementary("address", 0),
                    }],
                },
            },
            {
                "nodeType": "ModifierDefinition",
                "id": 8,
                "src": f.src("modifier onlyOwner() { _; }", 0),
                "name": "onlyOwner",
                "nameLocation": f.src("onlyOwner", 0),
                "parameters": { "nodeType": "ParameterList", "src": f.src("()", 0), "parameters": [] },
                "body": {
                    "nodeType": "Block",
                    "src": f.src("{ _; }", 0),
                    "statements": [{ "nodeType": "PlaceholderStatement", "src": f.src("_", 0) }],
                },
            },
            bump,
            {
                "nodeType": "FunctionDefinition",
                "id": 12,
                "src": f.src("function peek() public view virtual returns (bool);", 0),
                "name": "peek",
                "nameLocation": f.src("peek", 0),
                "kind": "function",
                "parameters": { "nodeType": "ParameterList", "src": f.src("()", 1), "parameters": [] },
                "returnParameters": {
                    "nodeType": "ParameterList",
                    "src": f.src("(bool)", 0),
                    "parameters": [{
                        "nodeType": "VariableDeclaration",
                        "id": 13,
                        "src": f.src("bool", 0),
                        "name": "",
                        "typeName": f.elementary("bool", 0),
                    }],
                },
            },
        ],
    });

    f.check(
        vec![
            json!({ "nodeType": "PragmaDirective", "src": f.src("pragma solidity ^0.8.0;", 0) }),
            json!({
                "nodeType": "ContractDefinition",
                "id": 1,
                "src": f.src("interface Base {}", 0),
                "name": "Base",
                "nameLocation": f.src("Base", 0),
                "contractKind": "interface",
            }),
            counter,
        ],
        expect![[r#"
            0:0 +23 macro "pragma solidity ^0.8.0;"
            2:10 +4 interface [declaration] "Base"
            3:0 +18 comment [documentation] "/// @title Counter"
            4:18 +7 class [abstract declaration] "Counter"
            4:29 +4 interface "Base"
            5:11 +5 struct [declaration] "Entry"
            5:19 +7 type "uint256"
            5:27 +5 property "value"
            6:4 +7 type "uint256"
            6:19 +5 property "count"
            7:10 +6 event "Bumped"
            7:17 +7 type "address"
            7:33 +2 parameter "by"
            8:13 +9 modifier [declaration] "onlyOwner"
            9:13 +4 method [declaration] "bump"
            9:18 +7 type "uint256"
            9:26 +4 parameter "step"
            9:41 +9 modifier "onlyOwner"
            9:60 +7 type "uint256"
            10:8 +5 property [modification] "count"
            10:17 +4 parameter "step"
            11:13 +6 event "Bumped"
            11:20 +3 variable "msg"
            11:24 +6 property "sender"
            12:15 +5 property "count"
            14:13 +4 method [abstract declaration] "peek"
            14:49 +4 type "bool"
        "#]],
    );
}

#[test]
fn writes_mark_their_targets() {
    let f = Fixture {
        text: r#"contract C {
    uint[] xs;
    function f(uint a) public {
        (xs[a], a) = (1, 2);
        a++;
        delete xs;
    }
}"#,
    };

    let statement = |src: String, expression: Value| {
        json!({ "nodeType": "ExpressionStatement", "src": src, "expression": expression })
    };
    let body = vec![
        statement(
            f.src("(xs[a], a) = (1, 2)", 0),
            json!({
                "nodeType": "Assignment",
                "src": f.src("(xs[a], a) = (1, 2)", 0),
                "operator": "=",
                "leftHandSide": {
                    "nodeType": "TupleExpression",
                    "src": f.src("(xs[a], a)", 0),
                    "components": [
                        {
                            "nodeType": "IndexAccess",
                            "src": f.src("xs[a]", 0),
                            "baseExpression": f.identifier("xs", 1, 2),
                            "indexExpression": f.identifier("a", 1, 4),
                        },
                        f.identifier("a", 2, 4),
                    ],
                },
                "rightHandSide": {
                    "nodeType": "TupleExpression",
                    "src": f.src("(1, 2)", 0),
                    "components": [f.literal("1", 0, "number"), f.literal("2", 0, "number")],
                },
            }),
        ),
        statement(
            f.src("a++", 0),
            json!({
                "nodeType": "UnaryOperation",
                "src": f.src("a++", 0),
                "operator": "++",
                "prefix": false,
                "subExpression": f.identifier("a", 3, 4),
            }),
        ),
        statement(
            f.src("delete xs", 0),
            json!({
                "nodeType": "UnaryOperation",
                "src": f.src("delete xs", 0),
                "operator": "delete",
                "prefix": true,
                "subExpression": f.identifier("xs", 2, 2),
            }),
        ),
    ];

    f.check(
        vec![json!({
            "nodeType": "ContractDefinition",
            "id": 1,
            "src": f.span("contract C", "}"),
            "name": "C",
            "nameLocation": f.src("C", 0),
            "nodes": [
                {
                    "nodeType": "VariableDeclaration",
                    "id": 2,
                    "src": f.src("uint[] xs", 0),
                    "name": "xs",
                    "nameLocation": f.src("xs", 0),
                    "stateVariable": true,
                    "typeName": {
                        "nodeType": "ArrayTypeName",
                        "src": f.src("uint[]", 0),
                        "baseType": f.elementary("uint", 0),
                    },
                },
                {
                    "nodeType": "FunctionDefinition",
                    "id": 3,
                    "src": f.span("function f", "xs;\n    }"),
                    "name": "f",
                    "nameLocation": f.src("f", 0),
                    "parameters": {
                        "nodeType": "ParameterList",
                        "src": f.src("(uint a)", 0),
                        "parameters": [{
                            "nodeType": "VariableDeclaration",
                            "id": 4,
                            "src": f.src("uint a", 0),
                            "name": "a",
                            "nameLocation": f.src("a", 0),
                            "typeName": f.elementary("uint", 1),
                        }],
                    },
                    "returnParameters": {
                        "nodeType": "ParameterList",
                        "src": f.after("public", 0),
                        "parameters": [],
                    },
                    "body": {
                        "nodeType": "Block",
                        "src": f.span("{\n        (", "xs;\n    }"),
                        "statements": body,
                    },
                },
            ],
        })],
        expect![[r#"
            0:9 +1 class [declaration] "C"
            1:4 +4 type "uint"
            1:11 +2 property "xs"
            2:13 +1 method [declaration] "f"
            2:15 +4 type "uint"
            2:20 +1 parameter "a"
            3:9 +2 property [modification] "xs"
            3:12 +1 parameter "a"
            3:16 +1 parameter [modification] "a"
            3:22 +1 number "1"
            3:25 +1 number "2"
            4:8 +1 parameter [modification] "a"
            5:15 +2 property [modification] "xs"
        "#]],
    );
}

#[test]
fn qualified_type_names_resolve_each_segment() {
    let f = Fixture { text: "library Lib { struct Point { uint x; } }\ncontract C { Lib.Point p; }" };
    f.check(
        vec![
            json!({
                "nodeType": "ContractDefinition",
                "id": 1,
                "src": f.span("library", "} }"),
                "name": "Lib",
                "nameLocation": f.src("Lib", 0),
                "contractKind": "library",
                "nodes": [{
                    "nodeType": "StructDefinition",
                    "id": 2,
                    "src": f.src("struct Point { uint x; }", 0),
                    "name": "Point",
                    "nameLocation": f.src("Point", 0),
                    "members": [{
                        "nodeType": "VariableDeclaration",
                        "id": 3,
                        "src": f.src("uint x", 0),
                        "name": "x",
                        "nameLocation": f.src("x", 0),
                        "typeName": f.elementary("uint", 0),
                    }],
                }],
            }),
            json!({
                "nodeType": "ContractDefinition",
                "id": 4,
                "src": f.src("contract C { Lib.Point p; }", 0),
                "name": "C",
                "nameLocation": f.src("C", 0),
                "nodes": [{
                    "nodeType": "VariableDeclaration",
                    "id": 5,
                    "src": f.src("Lib.Point p", 0),
                    "name": "p",
                    "nameLocation": f.src("p", 0),
                    "stateVariable": true,
                    "typeName": {
                        "nodeType": "UserDefinedTypeName",
                        "src": f.src("Lib.Point", 0),
                        "pathNode": {
                            "nodeType": "IdentifierPath",
                            "src": f.src("Lib.Point", 0),
                            "name": "Lib.Point",
                            "referencedDeclaration": 2,
                        },
                        "referencedDeclaration": 2,
                    },
                }],
            }),
        ],
        expect![[r#"
            0:8 +3 class [declaration] "Lib"
            0:21 +5 struct [declaration] "Point"
            0:29 +4 type "uint"
            0:34 +1 property "x"
            1:9 +1 class [declaration] "C"
            1:13 +3 class "Lib"
            1:17 +5 type "Point"
            1:23 +1 property "p"
        "#]],
    );
}

#[test]
fn override_lists_resolve_their_bases() {
    let f = Fixture {
        text: "contract B { function g() public virtual {} }
contract C is B {
    function g() public override(B) {}
    uint public override(B) x;
}",
    };
    let base = |nth: usize| {
        json!({
            "nodeType": "IdentifierPath",
            "src": f.src("B", nth),
            "name": "B",
            "referencedDeclaration": 1,
        })
    };
    f.check(
        vec![
            json!({
                "nodeType": "ContractDefinition",
                "id": 1,
                "src": f.src("contract B { function g() public virtual {} }", 0),
                "name": "B",
                "nameLocation": f.src("B", 0),
                "nodes": [{
                    "nodeType": "FunctionDefinition",
                    "id": 2,
                    "src": f.src("function g() public virtual {}", 0),
                    "name": "g",
                    "nameLocation": f.src("g", 0),
                    "kind": "function",
                    "parameters": { "nodeType": "ParameterList", "src": f.src("()", 0) },
                    "returnParameters": {
                        "nodeType": "ParameterList",
                        "src": f.after("virtual", 0),
                    },
                    "body": { "nodeType": "Block", "src": f.src("{}", 0) },
                }],
            }),
            json!({
                "nodeType": "ContractDefinition",
                "id": 3,
                "src": f.span("contract C", "x;\n}"),
                "name": "C",
                "nameLocation": f.src("C", 0),
                "baseContracts": [{
                    "nodeType": "InheritanceSpecifier",
                    "src": f.src("B", 1),
                    "baseName": base(1),
                }],
                "nodes": [
                    {
                        "nodeType": "FunctionDefinition",
                        "id": 4,
                        "src": f.src("function g() public override(B) {}", 0),
                        "name": "g",
                        "nameLocation": f.src("g", 1),
                        "kind": "function",
                        "parameters": { "nodeType": "ParameterList", "src": f.src("()", 1) },
                        "returnParameters": {
                            "nodeType": "ParameterList",
                            "src": f.after("override(B)", 0),
                        },
                        "overrides": {
                            "nodeType": "OverrideSpecifier",
                            "src": f.src("override(B)", 0),
                            "overrides": [base(2)],
                        },
                        "body": { "nodeType": "Block", "src": f.src("{}", 1) },
                    },
                    {
                        "nodeType": "VariableDeclaration",
                        "id": 5,
                        "src": f.src("uint public override(B) x", 0),
                        "name": "x",
                        "nameLocation": f.src("x", 0),
                        "stateVariable": true,
                        "typeName": f.elementary("uint", 0),
                        "overrides": {
                            "nodeType": "OverrideSpecifier",
                            "src": f.src("override(B)", 1),
                            "overrides": [base(3)],
                        },
                    },
                ],
            }),
        ],
        expect![[r#"
            0:9 +1 class [declaration] "B"
            0:22 +1 method [declaration] "g"
            1:9 +1 class [declaration] "C"
            1:14 +1 class "B"
            2:13 +1 method [declaration] "g"
            2:33 +1 class "B"
            3:4 +4 type "uint"
            3:25 +1 class "B"
            3:28 +1 property "x"
        "#]],
    );
}

#[test]
fn imported_declarations_resolve_through_sibling_units() {
    let f = Fixture {
        text: "import \"a.sol\";
contract C is A { function g() public { A(address(0)).f(); } }",
    };
    let b = f.unit(vec![
        json!({ "nodeType": "ImportDirective", "src": f.src("import \"a.sol\";", 0) }),
        json!({
            "nodeType": "ContractDefinition",
            "id": 10,
            "src": f.span("contract C", "} }"),
            "name": "C",
            "nameLocation": f.src("C", 0),
            "baseContracts": [{
                "nodeType": "InheritanceSpecifier",
                "src": f.src("A", 0),
                "baseName": {
                    "nodeType": "IdentifierPath",
                    "src": f.src("A", 0),
                    "name": "A",
                    "referencedDeclaration": 1,
                },
            }],
            "nodes": [{
                "nodeType": "FunctionDefinition",
                "id": 11,
                "src": f.span("function g", "; }"),
                "name": "g",
                "nameLocation": f.src("g", 0),
                "kind": "function",
                "parameters": { "nodeType": "ParameterList", "src": f.src("()", 0) },
                "returnParameters": { "nodeType": "ParameterList", "src": f.after("public", 0) },
                "body": {
                    "nodeType": "Block",
                    "src": f.span("{ A(", "; }"),
                    "statements": [{
                        "nodeType": "ExpressionStatement",
                        "src": f.src("A(address(0)).f()", 0),
                        "expression": {
                            "nodeType": "FunctionCall",
                            "src": f.src("A(address(0)).f()", 0),
                            "expression": {
                                "nodeType": "MemberAccess",
                                "src": f.src("A(address(0)).f", 0),
                                "memberName": "f",
                                "memberLocation": f.src("f", 0),
                                "referencedDeclaration": 2,
                                "expression": {
                                    "nodeType": "FunctionCall",
                                    "src": f.src("A(address(0))", 0),
                                    "expression": f.identifier("A", 1, 1),
                                    "arguments": [{
                                        "nodeType": "FunctionCall",
                                        "src": f.src("address(0)", 0),
                                        "expression": {
                                            "nodeType": "ElementaryTypeNameExpression",
                                            "src": f.src("address", 0),
                                            "typeName": f.elementary("address", 0),
                                        },
                                        "arguments": [f.literal("0", 0, "number")],
                                    }],
                                },
                            },
                            "arguments": [],
                        },
                    }],
                },
            }],
        }),
    ]);
    let a = json!({
        "nodeType": "SourceUnit",
        "id": 0,
        "src": "0:40:0",
        "nodes": [{
            "nodeType": "ContractDefinition",
            "id": 1,
            "src": "0:40:0",
            "name": "A",
            "nameLocation": "9:1:0",
            "nodes": [{
                "nodeType": "FunctionDefinition",
                "id": 2,
                "src": "13:25:0",
                "name": "f",
                "nameLocation": "22:1:0",
                "kind": "function",
                "parameters": { "nodeType": "ParameterList", "src": "23:2:0" },
                "returnParameters": { "nodeType": "ParameterList", "src": "35:0:0" },
            }],
        }],
    });
    let output = json!({
        "sources": {
            "a.sol": { "id": 0, "ast": a },
            "b.sol": { "id": 1, "ast": b },
        },
    });

    let loaded = load(&output.to_string(), Some("b.sol")).unwrap();
    let line_index = LineIndex::new(f.text);
    let mut builder = SemanticTokensBuilder::default();

    let alone = builder.build(&loaded.unit, f.text, &line_index).unwrap();
    assert!(render(f.text, &alone).contains("1:14 +1 variable \"A\""));

    let tokens =
        builder.build_with(&loaded.unit, &loaded.declarations(), f.text, &line_index).unwrap();
    expect![[r#"
        1:9 +1 class [declaration] "C"
        1:14 +1 class "A"
        1:27 +1 method [declaration] "g"
        1:40 +1 class "A"
        1:42 +7 type "address"
        1:50 +1 number "0"
        1:54 +1 method "f"
    "#]]
    .assert_eq(&render(f.text, &tokens));
}

#[test]
fn free_functions_and_unnamed_definitions() {
    let f = Fixture {
        text: "function twice(uint x) pure returns (uint) { return x * 2; }
contract C {
    constructor() { twice(1); }
}",
    };
    f.check(
        vec![
            json!({
                "nodeType": "FunctionDefinition",
                "id": 1,
                "src": f.src("function twice(uint x) pure returns (uint) { return x * 2; }", 0),
                "name": "twice",
                "nameLocation": f.src("twice", 0),
                "kind": "freeFunction",
                "parameters": {
                    "nodeType": "ParameterList",
                    "src": f.src("(uint x)", 0),
                    "parameters": [{
                        "nodeType": "VariableDeclaration",
                        "id": 2,
                        "src": f.src("uint x", 0),
                        "name": "x",
                        "nameLocation": f.src("x", 0),
                        "typeName": f.elementary("uint", 0),
                    }],
                },
                "returnParameters": {
                    "nodeType": "ParameterList",
                    "src": f.src("(uint)", 0),
                    "parameters": [{
                        "nodeType": "VariableDeclaration",
                        "id": 3,
                        "src": f.src("uint", 1),
                        "name": "",
                        "typeName": f.elementary("uint", 1),
                    }],
                },
                "body": {
                    "nodeType": "Block",
                    "src": f.src("{ return x * 2; }", 0),
                    "statements": [{
                        "nodeType": "Return",
                        "src": f.src("return x * 2", 0),
                        "expression": {
                            "nodeType": "BinaryOperation",
                            "src": f.src("x * 2", 0),
                            "operator": "*",
                            "leftExpression": f.identifier("x", 1, 2),
                            "rightExpression": f.literal("2", 0, "number"),
                        },
                    }],
                },
            }),
            json!({
                "nodeType": "ContractDefinition",
                "id": 4,
                "src": f.span("contract C", "}\n}"),
                "name": "C",
                "nameLocation": f.src("C", 0),
                "nodes": [{
                    "nodeType": "FunctionDefinition",
                    "id": 5,
                    "src": f.src("constructor() { twice(1); }", 0),
                    "name": "",
                    "kind": "constructor",
                    "parameters": { "nodeType": "ParameterList", "src": f.src("()", 0) },
                    "returnParameters": {
                        "nodeType": "ParameterList",
                        "src": f.after("constructor()", 0),
                    },
                    "body": {
                        "nodeType": "Block",
                        "src": f.src("{ twice(1); }", 0),
                        "statements": [{
                            "nodeType": "ExpressionStatement",
                            "src": f.src("twice(1)", 0),
                            "expression": {
                                "nodeType": "FunctionCall",
                                "src": f.src("twice(1)", 0),
                                "expression": f.identifier("twice", 1, 1),
                                "arguments": [f.literal("1", 0, "number")],
                            },
                        }],
                    },
                }],
            }),
        ],
        expect![[r#"
            0:9 +5 function [declaration] "twice"
            0:15 +4 type "uint"
            0:20 +1 parameter "x"
            0:37 +4 type "uint"
            0:52 +1 parameter "x"
            0:56 +1 number "2"
            1:9 +1 class [declaration] "C"
            2:20 +5 function "twice"
            2:26 +1 number "1"
        "#]],
    );
}

#[test]
fn unresolved_references_fall_back_to_variables() {
    let f = Fixture { text: "uint constant Y = missing;" };
    f.check(
        vec![json!({
            "nodeType": "VariableDeclaration",
            "id": 1,
            "src": f.span("uint", "missing"),
            "name": "Y",
            "nameLocation": f.src("Y", 0),
            "constant": true,
            "typeName": f.elementary("uint", 0),
            "value": f.identifier("missing", 0, 99),
        })],
        expect![[r#"
            0:0 +4 type "uint"
            0:14 +1 variable [readonly] "Y"
            0:18 +7 variable "missing"
        "#]],
    );
}

#[test]
fn wrapper_at_the_same_offset_yields_to_the_inner_node() {
    let f = Fixture { text: "uint256 constant X = uint256(1);" };
    let unit = f.unit(vec![json!({
        "nodeType": "VariableDeclaration",
        "id": 1,
        "src": f.span("uint256", "(1)"),
        "name": "X",
        "nameLocation": f.src("X", 0),
        "constant": true,
        "typeName": f.elementary("uint256", 0),
        "value": {
            "nodeType": "FunctionCall",
            "src": f.src("uint256(1)", 0),
            "expression": {
                "nodeType": "ElementaryTypeNameExpression",
                "src": f.src("uint256(1)", 0),
                "typeName": f.elementary("uint256", 1),
            },
            "arguments": [f.literal("1", 0, "number")],
        },
    })]);

    let tokens = f.build(unit).unwrap();
    expect![[r#"
        0:0 +7 type "uint256"
        0:17 +1 variable [readonly] "X"
        0:21 +7 type "uint256"
        0:29 +1 number "1"
    "#]]
    .assert_eq(&render(f.text, &tokens));
}

#[test]
fn spans_that_are_missing_or_stale_are_skipped() {
    let f = Fixture { text: "uint constant Y = 1;" };
    let unit = f.unit(vec![json!({
        "nodeType": "VariableDeclaration",
        "id": 1,
        "src": "-1:-1:-1",
        "name": "Y",
        "nameLocation": "400:1:0",
        "constant": true,
        "typeName": { "nodeType": "ElementaryTypeName", "name": "uint" },
        "value": f.literal("1", 0, "number"),
    })]);

    expect![[r#"
        0:18 +1 number "1"
    "#]]
    .assert_eq(&render(f.text, &f.build(unit).unwrap()));
}

/// An event whose parameter claims to start before its name while its type
/// is reported after it.
fn stale_event() -> (Fixture, Value) {
    let f = Fixture { text: "event E(uint256 value);" };
    let unit = f.unit(vec![json!({
        "nodeType": "EventDefinition",
        "id": 1,
        "src": f.src("event E(uint256 value);", 0),
        "name": "E",
        "nameLocation": f.src("E", 0),
        "parameters": {
            "nodeType": "ParameterList",
            "src": f.src("(uint256 value)", 0),
            "parameters": [{
                "nodeType": "VariableDeclaration",
                "id": 2,
                "src": f.src("(uint256 value", 0),
                "name": "value",
                "nameLocation": f.src("uint256", 0),
                "typeName": {
                    "nodeType": "ElementaryTypeName",
                    "src": f.src("value", 0),
                    "name": "uint256",
                },
            }],
        },
    })]);
    (f, unit)
}

#[test]
fn tokens_before_an_emitted_token_fail_the_build() {
    let (f, unit) = stale_event();

    let error = f.build(unit).unwrap_err();
    assert_eq!(
        error,
        BuildError::OutOfOrder {
            previous: TokenPosition { line: 0, start: 16 },
            next: TokenPosition { line: 0, start: 8 },
            range: TextRange::at(8.into(), 7.into()),
        }
    );
    assert_eq!(
        error.to_string(),
        "semantic token at 0:8 is out of order, the previous token is at 0:16"
    );
    assert_eq!(error.to_diagnostic().range(), error.range());
}

#[test]
fn builder_is_reusable_after_a_failed_build() {
    let (stale, bad) = stale_event();
    let bad = source_unit_from_value(bad).unwrap();

    let f = Fixture { text: "uint constant Y = 1;" };
    let good = f.unit(vec![json!({
        "nodeType": "VariableDeclaration",
        "id": 1,
        "src": f.span("uint", "1"),
        "name": "Y",
        "nameLocation": f.src("Y", 0),
        "constant": true,
        "value": f.literal("1", 0, "number"),
    })]);
    let good = source_unit_from_value(good).unwrap();

    let mut builder = SemanticTokensBuilder::default();
    assert!(builder.build(&bad, stale.text, &LineIndex::new(stale.text)).is_err());

    let tokens = builder.build(&good, f.text, &LineIndex::new(f.text)).unwrap();
    assert_eq!(tokens.data(), [0, 14, 1, 19, 64, 0, 4, 1, 11, 0]);
}

#[derive(Debug, Clone, Copy)]
enum Declaration {
    Enum,
    Constant(u32),
    Struct,
}

/// A generated document together with its AST and the number of tokens it
/// should produce.
struct Generated {
    text: String,
    nodes: Vec<Value>,
    expected: usize,
}

impl Generated {
    fn new(declarations: &[(Declaration, &str)]) -> Self {
        let mut this = Self { text: String::new(), nodes: Vec::new(), expected: 0 };
        for (i, &(declaration, separator)) in declarations.iter().enumerate() {
            let id = 10 * i as i64;
            let start = this.text.len();
            let node = match declaration {
                Declaration::Enum => {
                    this.push("enum ");
                    let name = this.push(&format!("E{i}"));
                    this.push(" { ");
                    let a = this.push(&format!("A{i}"));
                    this.push(", ");
                    let b = this.push(&format!("B{i}"));
                    this.push(" }");
                    this.expected += 3;
                    json!({
                        "nodeType": "EnumDefinition", "id": id, "src": this.src_from(start),
                        "name": format!("E{i}"), "nameLocation": name,
                        "members": [
                            { "nodeType": "EnumValue", "id": id + 1, "src": a, "name": format!("A{i}"), "nameLocation": a },
                            { "nodeType": "EnumValue", "id": id + 2, "src": b, "name": format!("B{i}"), "nameLocation": b },
                        ],
                    })
                }
                Declaration::Constant(value) => {
                    let ty = this.push("uint256");
                    this.push(" constant ");
                    let name = this.push(&format!("K{i}"));
                    this.push(" = ");
                    let literal = this.push(&value.to_string());
                    let src = this.src_from(start);
                    this.push(";");
                    this.expected += 3;
                    json!({
                        "nodeType": "VariableDeclaration", "id": id, "src": src,
                        "name": format!("K{i}"), "nameLocation": name, "constant": true,
                        "typeName": { "nodeType": "ElementaryTypeName", "src": ty, "name": "uint256" },
                        "value": { "nodeType": "Literal", "src": literal, "kind": "number" },
                    })
                }
                Declaration::Struct => {
                    this.push("struct ");
                    let name = this.push(&format!("S{i}"));
                    this.push(" { ");
                    let member_start = this.text.len();
                    let ty = this.push("bool");
                    this.push(" ");
                    let member = this.push(&format!("f{i}"));
                    let member_src = this.src_from(member_start);
                    this.push("; }");
                    this.expected += 3;
                    json!({
                        "nodeType": "StructDefinition", "id": id, "src": this.src_from(start),
                        "name": format!("S{i}"), "nameLocation": name,
                        "members": [{
                            "nodeType": "VariableDeclaration", "id": id + 1, "src": member_src,
                            "name": format!("f{i}"), "nameLocation": member,
                            "typeName": { "nodeType": "ElementaryTypeName", "src": ty, "name": "bool" },
                        }],
                    })
                }
            };
            this.nodes.push(node);
            this.push(separator);
        }
        this
    }

    /// Appends `text` and returns its `src`.
    fn push(&mut self, text: &str) -> String {
        let start = self.text.len();
        self.text.push_str(text);
        format!("{start}:{}:0", text.len())
    }

    fn src_from(&self, start: usize) -> String {
        format!("{start}:{}:0", self.text.len() - start)
    }

    fn unit(&self) -> Value {
        json!({ "nodeType": "SourceUnit", "src": self.src_from(0), "nodes": self.nodes })
    }
}

fn documents() -> impl Strategy<Value = Vec<(Declaration, &'static str)>> {
    let declaration = prop_oneof![
        Just(Declaration::Enum),
        any::<u32>().prop_map(Declaration::Constant),
        Just(Declaration::Struct),
    ];
    let separator = prop::sample::select(vec![" ", "\n", "\n\n", " /* é😀 */ ", "\r\n", "\t"]);
    prop::collection::vec((declaration, separator), 0..24)
}

fn encodings() -> impl Strategy<Value = PositionEncoding> {
    prop::sample::select(PositionEncoding::ALL.to_vec())
}

proptest! {
    #[test]
    fn generated_documents_obey_the_wire_laws(
        declarations in documents(),
        encoding in encodings(),
    ) {
        let generated = Generated::new(&declarations);
        let tokens = build(&generated.text, generated.unit(), encoding).unwrap();
        let again = build(&generated.text, generated.unit(), encoding).unwrap();
        prop_assert_eq!(&tokens, &again);

        prop_assert_eq!(tokens.len(), generated.expected);
        prop_assert_eq!(tokens.data().len() % 5, 0);
        for token in tokens.tokens() {
            prop_assert!(TokenModifiers::from_bits(token.token_modifiers).is_some());
            prop_assert!(token.length > 0);
        }

        let decoded = tokens.decode();
        for pair in decoded.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            prop_assert!(previous.position() < next.position());
            if previous.line == next.line {
                prop_assert!(previous.start + previous.length <= next.start);
            }
        }
    }

    #[test]
    fn decoded_positions_match_the_source(declarations in documents()) {
        let generated = Generated::new(&declarations);
        let tokens = build(&generated.text, generated.unit(), PositionEncoding::Utf32).unwrap();

        let lines: Vec<Vec<char>> =
            generated.text.split('\n').map(|line| line.chars().collect()).collect();
        for token in tokens.decode() {
            let line = &lines[token.line as usize];
            let start = token.start as usize;
            let lexeme: String = line[start..start + token.length as usize].iter().collect();
            prop_assert!(
                lexeme.chars().all(|c| c.is_ascii_alphanumeric()),
                "{} covers {:?}", token, lexeme
            );
        }
    }
}
