use qj_lang::{CmpOp, Condition, Connective, PredicateChain};
use serde_json::Value;

use crate::coerce::{loose_eq, str_to_number, to_number};


/// `candidate[key]` for objects; arrays and scalars have no keys.
pub fn lookup<'v>(candidate: &'v Value, key: &str) -> Option<&'v Value> {
    match candidate {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// Evaluate one atomic condition against a candidate element.
pub fn eval_condition(candidate: &Value, cond: &Condition) -> bool {
    match cond.op {
        CmpOp::Any => true,
        CmpOp::Eq => loose_eq(lookup(candidate, &cond.key), &cond.value),
        CmpOp::Ne => !loose_eq(lookup(candidate, &cond.key), &cond.value),
        op @ (CmpOp::Ge | CmpOp::Le | CmpOp::Gt | CmpOp::Lt) => {
            let lhs = to_number(lookup(candidate, &cond.key));
            let rhs = str_to_number(&cond.value);
            compare_numbers(op, lhs, rhs)
        }
    }
}

/// Evaluate a whole chain as a left fold; `&&` and `||` share one precedence.
pub fn eval_chain(candidate: &Value, chain: &PredicateChain) -> bool {
    chain
        .rest()
        .iter()
        .fold(eval_condition(candidate, chain.first()), |acc, (conn, cond)| {
            let next = eval_condition(candidate, cond);
            match conn {
                Connective::And => acc && next,
                Connective::Or => acc || next,
            }
        })
}

fn compare_numbers(op: CmpOp, lhs: f64, rhs: f64) -> bool {
    if lhs.is_nan() || rhs.is_nan() {
        return false;
    }
    match op {
        CmpOp::Ge => lhs >= rhs,
        CmpOp::Le => lhs <= rhs,
        CmpOp::Gt => lhs > rhs,
        CmpOp::Lt => lhs < rhs,
        _ => false,
    }
}
