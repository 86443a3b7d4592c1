#![allow(dead_code)]

use chsql_core::ast::{ColumnDef, ColumnType, Expr, ExprList, Literal};
use chsql_core::ParseError;

pub fn parse(sql: &str) -> Expr {
    chsql_core::parse_expression(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    chsql_core::parse_expression(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_type(sql: &str) -> ColumnType {
    chsql_core::parse_column_type(sql)
        .unwrap_or_else(|e| panic!("Failed to parse type: {sql}\nError: {e:?}"))
}

pub fn parse_type_err(sql: &str) -> ParseError {
    chsql_core::parse_column_type(sql).expect_err(&format!("Expected type error for: {sql}"))
}

pub fn parse_column(sql: &str) -> ColumnDef {
    chsql_core::parse_column_def(sql)
        .unwrap_or_else(|e| panic!("Failed to parse column: {sql}\nError: {e:?}"))
}

/// Parses `sql` and renders the tree in prefix form, e.g. `Or(And(a, b), c)`.
pub fn shape_of(sql: &str) -> String {
    shape(&parse(sql))
}

/// Renders an expression tree in prefix form.
pub fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => ident.name.clone(),
        Expr::Path { parts, .. } => parts
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join("."),
        Expr::Number(n) => n.text.clone(),
        Expr::String(s) => format!("'{}'", s.value),
        Expr::Date(d) => format!("{:?}('{}')", d.kind, d.value.value),
        Expr::Alias { expr, alias, .. } => format!("Alias({}, {})", shape(expr), alias.name),
        Expr::Unary { op, operand, .. } => format!("Unary({}, {})", op.as_str(), shape(operand)),
        Expr::Binary {
            left,
            op,
            right,
            negated,
            global,
            ..
        } => {
            let prefix = match (negated, global) {
                (true, _) => "Not",
                (_, true) => "Global",
                _ => "",
            };
            format!("{prefix}{op:?}({}, {})", shape(left), shape(right))
        }
        Expr::Not { expr, .. } => format!("Not({})", shape(expr)),
        Expr::IsNull { expr, .. } => format!("IsNull({})", shape(expr)),
        Expr::IsNotNull { expr, .. } => format!("IsNotNull({})", shape(expr)),
        Expr::Ternary {
            condition,
            then_expr,
            else_expr,
            ..
        } => format!(
            "Ternary({}, {}, {})",
            shape(condition),
            shape(then_expr),
            shape(else_expr)
        ),
        Expr::Case {
            subject,
            when_clauses,
            else_clause,
            ..
        } => {
            let mut out = format!("Case({}", shape(subject));
            for clause in when_clauses {
                out.push_str(&format!("; {} => {}", shape(&clause.condition), shape(&clause.result)));
            }
            if let Some(else_clause) = else_clause {
                out.push_str(&format!("; else {}", shape(else_clause)));
            }
            out.push(')');
            out
        }
        Expr::Cast { expr, data_type, .. } => {
            format!("Cast({} AS {})", shape(expr), type_shape(data_type))
        }
        Expr::Extract { unit, from, .. } => format!("Extract({unit}, {})", shape(from)),
        Expr::Interval { value, unit, .. } => format!("Interval({}, {unit})", shape(value)),
        Expr::Function(call) => {
            let mut out = format!("{}{}", call.name.name, list_shape(&call.params.params, "(", ")"));
            if let Some(args) = &call.params.args {
                out.push_str(&list_shape(args, "(", ")"));
            }
            out
        }
        Expr::Params(params) => {
            let mut out = list_shape(&params.params, "(", ")");
            if let Some(args) = &params.args {
                out.push_str(&list_shape(args, "(", ")"));
            }
            out
        }
        Expr::Array(list) => list_shape(list, "[", "]"),
        Expr::Subscript { expr, index, .. } => {
            format!("Subscript({}, {})", shape(expr), list_shape(index, "[", "]"))
        }
        Expr::Subquery { sql, .. } => format!("Subquery({sql})"),
    }
}

fn list_shape(list: &ExprList, open: &str, close: &str) -> String {
    let items = list.items.iter().map(shape).collect::<Vec<_>>().join(", ");
    let distinct = if list.distinct { "DISTINCT " } else { "" };
    format!("{open}{distinct}{items}{close}")
}

/// Renders a column type, e.g. `Map(String, Array(Int32))`.
pub fn type_shape(column_type: &ColumnType) -> String {
    match column_type {
        ColumnType::Scalar { name } | ColumnType::Property { name } => name.name.clone(),
        ColumnType::Parametric { name, params, .. } => {
            let params = params
                .iter()
                .map(|p| match p {
                    Literal::Number(n) => n.text.clone(),
                    Literal::String(s) => format!("'{}'", s.value),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({params})", name.name)
        }
        ColumnType::Complex { name, types, .. } => {
            let types = types.iter().map(type_shape).collect::<Vec<_>>().join(", ");
            format!("{}({types})", name.name)
        }
        ColumnType::Nested { name, columns, .. } => {
            let columns = columns
                .iter()
                .map(|c| match &c.column_type {
                    Some(t) => format!("{} {}", c.name.name, type_shape(t)),
                    None => c.name.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({columns})", name.name)
        }
        ColumnType::Enum { name, values, .. } => {
            let values = values
                .iter()
                .map(|v| format!("'{}'={}", v.label.value, v.value.text))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({values})", name.name)
        }
    }
}
