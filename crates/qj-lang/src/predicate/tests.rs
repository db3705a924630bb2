use super::*;

fn cond(key: &str, op: CmpOp, value: &str) -> Condition {
    Condition {
        key: key.to_string(),
        op,
        value: value.to_string(),
    }
}

// -----------------------------------------------------------------------
// Single conditions
// -----------------------------------------------------------------------

#[test]
fn condition_each_operator() {
    assert_eq!(parse_condition("a>=1").unwrap(), cond("a", CmpOp::Ge, "1"));
    assert_eq!(parse_condition("a<=1").unwrap(), cond("a", CmpOp::Le, "1"));
    assert_eq!(parse_condition("a==1").unwrap(), cond("a", CmpOp::Eq, "1"));
    assert_eq!(parse_condition("a>1").unwrap(), cond("a", CmpOp::Gt, "1"));
    assert_eq!(parse_condition("a<1").unwrap(), cond("a", CmpOp::Lt, "1"));
    assert_eq!(parse_condition("a!=1").unwrap(), cond("a", CmpOp::Ne, "1"));
}

#[test]
fn condition_trims_operands() {
    assert_eq!(
        parse_condition("  name ==  Alice  ").unwrap(),
        cond("name", CmpOp::Eq, "Alice")
    );
}

#[test]
fn condition_two_char_operator_wins_over_prefix() {
    let c = parse_condition("score>=10").unwrap();
    assert_eq!(c.op, CmpOp::Ge);
    assert_eq!(c.value, "10");
}

#[test]
fn condition_splits_at_first_occurrence() {
    let c = parse_condition("a==b==c").unwrap();
    assert_eq!(c.key, "a");
    assert_eq!(c.value, "b==c");
}

#[test]
fn condition_wildcard_has_empty_operands() {
    assert_eq!(parse_condition("*").unwrap(), Condition::wildcard());
    assert_eq!(parse_condition(" * ").unwrap(), Condition::wildcard());
}

#[test]
fn condition_without_operator_is_error() {
    let err = parse_condition(" name ").unwrap_err();
    assert_eq!(
        err,
        PredicateError::InvalidCondition {
            condition: "name".into()
        }
    );
    assert!(err.to_string().contains("invalid condition"));
}

// -----------------------------------------------------------------------
// Chains
// -----------------------------------------------------------------------

#[test]
fn chain_single_term() {
    let chain = parse_predicate("age>=18").unwrap();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.first(), &cond("age", CmpOp::Ge, "18"));
    assert!(chain.rest().is_empty());
}

#[test]
fn chain_two_terms() {
    let chain = parse_predicate("age>=18&&age<65").unwrap();
    assert_eq!(chain.len(), 2);
    assert_eq!(
        chain.rest(),
        &[(Connective::And, cond("age", CmpOp::Lt, "65"))]
    );
}

#[test]
fn chain_mixed_connectives_keep_source_order() {
    let chain = parse_predicate("a==1&&b==2||c==3").unwrap();
    let keys: Vec<&str> = chain.conditions().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    let conns: Vec<Connective> = chain.connectives().collect();
    assert_eq!(conns, vec![Connective::And, Connective::Or]);
}

#[test]
fn chain_or_before_and_keeps_source_order() {
    let chain = parse_predicate("a==1 || b==2 && c==3").unwrap();
    let conns: Vec<Connective> = chain.connectives().collect();
    assert_eq!(conns, vec![Connective::Or, Connective::And]);
}

#[test]
fn chain_repeated_connectives_drop_nothing() {
    let chain = parse_predicate("a==1&&b==2&&c==3&&d==4").unwrap();
    assert_eq!(chain.len(), 4);
    let keys: Vec<&str> = chain.conditions().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
}

#[test]
fn chain_trailing_connective_is_error() {
    let err = parse_predicate("a==1&&").unwrap_err();
    assert_eq!(
        err,
        PredicateError::InvalidCondition {
            condition: String::new()
        }
    );
}

#[test]
fn chain_bad_middle_term_is_error() {
    let err = parse_predicate("a==1||oops&&c==3").unwrap_err();
    assert_eq!(
        err,
        PredicateError::InvalidCondition {
            condition: "oops".into()
        }
    );
}

#[test]
fn chain_display() {
    let chain = parse_predicate("a==1&&b>2||*").unwrap();
    assert_eq!(chain.to_string(), "a == 1 && b > 2 || *");
}
