//! Dump AST - Parse Expressions and Column Types
//!
//! Parses each command-line argument as an expression, falling back to a
//! column type, and prints the resulting tree or the first error.
//!
//! Run with: cargo run --example dump_ast -- "a AND b OR c" "Array(Int32)"

use chsql_core::{parse_column_type, parse_expression, ParseError};

fn main() {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec![
            "quantile(0.5)(latency) AS p50".to_string(),
            "x NOT IN (1, 2) AND ts > now() - INTERVAL 1 DAY".to_string(),
            "Nested(id UInt64, tags Array(String))".to_string(),
        ]
    } else {
        inputs
    };

    for sql in &inputs {
        println!("-- {sql}");
        match dump(sql) {
            Ok(tree) => println!("{tree}"),
            Err(err) => println!("error: {err}"),
        }
    }
}

fn dump(sql: &str) -> Result<String, ParseError> {
    match parse_expression(sql) {
        Ok(expr) => Ok(format!("{expr:#?}")),
        Err(expr_err) => parse_column_type(sql)
            .map(|ty| format!("{ty:#?}"))
            .map_err(|_| expr_err),
    }
}
