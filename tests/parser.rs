use ksm::{
    ast::{Block, Comparison, Statement},
    error::ParseError,
    interpreter::lexer::TokenKind,
    parse, tokenize,
};

fn parse_ok(src: &str) -> Block {
    parse(tokenize(src)).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    match parse(tokenize(src)) {
        Ok(block) => panic!("Parsed {src:?} but expected an error: {block:?}"),
        Err(e) => e,
    }
}

#[test]
fn empty_input_is_an_empty_block() {
    assert!(parse_ok("").is_empty());
}

#[test]
fn declaration_carries_name_and_value_token() {
    let block = parse_ok("declare greeting = \"hi there\"");
    let [Statement::VarDecl { name, value, line }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    assert_eq!(name, "greeting");
    assert_eq!((value.kind, value.text.as_str(), value.column),
               (TokenKind::String, "hi there", 20));
    assert_eq!(*line, 1);
}

#[test]
fn print_accepts_one_operand() {
    for (src, kind, text) in [("displayln(x)", TokenKind::Identifier, "x"),
                              ("displayln(42)", TokenKind::Number, "42"),
                              ("displayln(\"s\")", TokenKind::String, "s")]
    {
        let block = parse_ok(src);
        let [Statement::Print { value, .. }] = block.statements.as_slice() else {
            panic!("unexpected tree for {src:?}: {block:?}");
        };
        assert_eq!((value.kind, value.text.as_str()), (kind, text));
    }
}

#[test]
fn if_holds_condition_and_body() {
    let block = parse_ok("if case x > 3 { displayln(x) declare y = x }");
    let [Statement::If { condition, body, .. }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    assert_eq!(condition.left.text, "x");
    assert_eq!(condition.op, Comparison::Greater);
    assert_eq!(condition.right.text, "3");
    assert_eq!(condition.to_string(), "x > 3");
    assert_eq!(body.statements.len(), 2);
}

#[test]
fn otherwise_is_an_independent_statement() {
    let block = parse_ok("if case 1 < 2 { } otherwise { displayln(1) }");
    assert!(matches!(block.statements.as_slice(),
                     [Statement::If { .. }, Statement::Otherwise { .. }]));

    let block = parse_ok("otherwise { }");
    assert!(matches!(block.statements.as_slice(), [Statement::Otherwise { body, .. }] if body.is_empty()));
}

#[test]
fn condition_operands_may_be_any_token() {
    let block = parse_ok("if case \"a b\" == declare { }");
    let [Statement::If { condition, .. }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    assert_eq!(condition.left.kind, TokenKind::String);
    assert_eq!(condition.right.kind, TokenKind::Keyword);
    assert_eq!(condition.op, Comparison::Equal);
}

#[test]
fn condition_operator_may_be_any_operator_token() {
    let block = parse_ok("if case 1 = 1 { }");
    let [Statement::If { condition, .. }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    assert_eq!(condition.op, Comparison::Unsupported("=".to_string()));
}

#[test]
fn structural_tokens_match_by_text() {
    // A string whose text is `}` closes the block.
    let block = parse_ok("if case 1 < 2 { displayln(x) \"}\"");
    let [Statement::If { body, .. }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    assert_eq!(body.statements.len(), 1);
}

#[test]
fn nested_blocks() {
    let block = parse_ok("if case 1 < 2 { otherwise { if case 2 < 3 { displayln(deep) } } }");
    let [Statement::If { body, .. }] = block.statements.as_slice() else {
        panic!("unexpected tree: {block:?}");
    };
    let [Statement::Otherwise { body, .. }] = body.statements.as_slice() else {
        panic!("unexpected body: {body:?}");
    };
    assert!(matches!(body.statements.as_slice(), [Statement::If { .. }]));
}

#[test]
fn missing_identifier_after_declare() {
    assert_eq!(parse_err("declare 5 = x"),
               ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                             found:    "number '5'".to_string(),
                                             line:     1,
                                             column:   9, });
}

#[test]
fn missing_equals_in_declaration() {
    assert_eq!(parse_err("declare x 5"),
               ParseError::UnexpectedToken { expected: "'='".to_string(),
                                             found:    "number '5'".to_string(),
                                             line:     1,
                                             column:   11, });
}

#[test]
fn premature_end_of_input() {
    assert_eq!(parse_err("otherwise { displayln(x)"),
               ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                  line:     1,
                                                  column:   25, });
}

#[test]
fn if_requires_case() {
    let err = parse_err("if x > 3 { }");
    assert!(matches!(&err, ParseError::UnexpectedToken { expected, .. } if expected == "'case'"));
}

#[test]
fn condition_requires_operator() {
    let err = parse_err("if case x y z { }");
    assert!(matches!(&err, ParseError::UnexpectedToken { expected, found, .. }
                     if expected == "an operator" && found == "identifier 'y'"));
}

#[test]
fn statements_must_start_with_a_keyword() {
    assert_eq!(parse_err("declare x = 1 }"),
               ParseError::ExpectedStatement { found:  "operator '}'".to_string(),
                                               line:   1,
                                               column: 15, });
    assert!(matches!(parse_err("case"), ParseError::UnexpectedKeyword { keyword, .. } if keyword == "case"));
    assert!(matches!(parse_err("@"), ParseError::ExpectedStatement { found, .. } if found == "invalid character '@'"));
}

#[test]
fn error_in_later_statement_discards_whole_line() {
    let err = parse_err("declare x = 1 displayln(x) displayln x");
    assert_eq!(err.line(), 1);
    assert!(err.to_string().contains("expected '('"));
}

#[test]
fn error_messages_name_position_and_tokens() {
    assert_eq!(parse_err("displayln(x").to_string(),
               "Error on line 1, column 12: expected ')', found end of input.");
    assert_eq!(parse_err("declare = 5").to_string(),
               "Error on line 1, column 9: expected an identifier, found operator '='.");
}

#[test]
fn display_renders_canonical_source() {
    let src = "declare  s =\"a b\"   displayln( s ) if case s == 3 {displayln(1)} otherwise{}";
    assert_eq!(parse_ok(src).to_string(),
               "declare s = \"a b\" displayln(s) if case s == 3 { displayln(1) } otherwise {  }");
}

#[test]
fn display_reparses_to_the_same_rendering() {
    let src = "if case \"x\" < 2 { declare y = \"}\" otherwise { displayln(y) } }";
    let rendered = parse_ok(src).to_string();
    assert_eq!(parse_ok(&rendered).to_string(), rendered);
}
