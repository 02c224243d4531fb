//! Backend wire protocol for the employee table endpoint.
//!
//! The backend answers the fixed POST with one of two envelope shapes,
//! `{ "TABLE_DATA": { "data": [[..], ..] } }` or `{ "data": [[..], ..] }`,
//! and each row is a positional array:
//!
//! `[username, department, city, id, joinDate, salaryString]`
//!
//! The salary arrives currency-formatted (`"$320,800"`). Decoding strips
//! the formatting and parses the remainder; a non-finite or unparseable
//! salary is a typed error rather than a silent `NaN`.

use crate::Employee;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// 行内字段的位置约定（后端未文档化，仅按消费顺序固定）
const COL_USERNAME: usize = 0;
const COL_DEPARTMENT: usize = 1;
const COL_CITY: usize = 2;
const COL_ID: usize = 3;
const COL_JOIN_DATE: usize = 4;
const COL_SALARY: usize = 5;

// =========================================================
// 错误类型
// =========================================================

/// 解码失败时的错误，`row` 为出错行的下标
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// 响应体不是合法 JSON 或两种包裹形状都不匹配
    BadEnvelope(String),
    /// 行字段数不足
    ShortRow { row: usize, len: usize },
    /// 某一列不是期望的类型
    BadField { row: usize, field: &'static str },
    /// 工资字符串去除格式后无法解析为有限数
    BadSalary { row: usize, raw: String },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::BadEnvelope(msg) => write!(f, "unrecognized response shape: {}", msg),
            ProtocolError::ShortRow { row, len } => {
                write!(f, "row {} has {} fields, expected 6", row, len)
            }
            ProtocolError::BadField { row, field } => {
                write!(f, "row {}: field `{}` has the wrong type", row, field)
            }
            ProtocolError::BadSalary { row, raw } => {
                write!(f, "row {}: salary {:?} is not a finite number", row, raw)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

// =========================================================
// 响应包裹
// =========================================================

#[derive(Debug, Deserialize)]
struct TableEnvelope {
    #[serde(rename = "TABLE_DATA")]
    table_data: Option<TableData>,
    data: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
struct TableData {
    data: Vec<Vec<Value>>,
}

/// 解码完整响应体为员工列表
///
/// 两种包裹形状都被接受，`TABLE_DATA.data` 优先；两者皆缺省视为空表。
pub fn decode_employees(body: &str) -> Result<Vec<Employee>, ProtocolError> {
    let envelope: TableEnvelope =
        serde_json::from_str(body).map_err(|e| ProtocolError::BadEnvelope(e.to_string()))?;

    let rows = envelope
        .table_data
        .map(|t| t.data)
        .or(envelope.data)
        .unwrap_or_default();

    rows.iter()
        .enumerate()
        .map(|(i, row)| decode_row(i, row))
        .collect()
}

/// 解码一行位置数组
pub fn decode_row(index: usize, row: &[Value]) -> Result<Employee, ProtocolError> {
    if row.len() < 6 {
        return Err(ProtocolError::ShortRow {
            row: index,
            len: row.len(),
        });
    }

    Ok(Employee {
        username: text_field(index, row, COL_USERNAME, "username")?,
        department: text_field(index, row, COL_DEPARTMENT, "department")?,
        city: text_field(index, row, COL_CITY, "city")?,
        id: id_field(index, &row[COL_ID])?,
        join_date: text_field(index, row, COL_JOIN_DATE, "joinDate")?,
        salary: salary_field(index, &row[COL_SALARY])?,
    })
}

fn text_field(
    row_index: usize,
    row: &[Value],
    col: usize,
    name: &'static str,
) -> Result<String, ProtocolError> {
    row[col]
        .as_str()
        .map(str::to_string)
        .ok_or(ProtocolError::BadField {
            row: row_index,
            field: name,
        })
}

/// id 可能以 JSON 数字或数字字符串出现
fn id_field(row_index: usize, value: &Value) -> Result<i64, ProtocolError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(ProtocolError::BadField {
            row: row_index,
            field: "id",
        }),
        Value::String(s) => s.trim().parse().map_err(|_| ProtocolError::BadField {
            row: row_index,
            field: "id",
        }),
        _ => Err(ProtocolError::BadField {
            row: row_index,
            field: "id",
        }),
    }
}

fn salary_field(row_index: usize, value: &Value) -> Result<f64, ProtocolError> {
    match value {
        // 个别后端版本直接给数字
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).ok_or_else(|| {
            ProtocolError::BadSalary {
                row: row_index,
                raw: n.to_string(),
            }
        }),
        Value::String(s) => parse_salary(s).ok_or_else(|| ProtocolError::BadSalary {
            row: row_index,
            raw: s.clone(),
        }),
        _ => Err(ProtocolError::BadField {
            row: row_index,
            field: "salary",
        }),
    }
}

/// 去除货币格式后解析工资："$320,800" -> 320800.0
///
/// 只保留 `[0-9.-]`，解析失败或结果非有限返回 None。
pub fn parse_salary(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(username: &str, dept: &str, city: &str, id: Value, date: &str, salary: &str) -> Value {
        json!([username, dept, city, id, date, salary])
    }

    // =========================================================
    // 包裹形状
    // =========================================================

    #[test]
    fn decodes_nested_table_data_shape() {
        let body = json!({
            "TABLE_DATA": {
                "data": [row("Tiger Nixon", "System Architect", "Edinburgh",
                             json!(1), "2011/04/25", "$320,800")]
            }
        })
        .to_string();

        let employees = decode_employees(&body).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].username, "Tiger Nixon");
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].salary, 320_800.0);
    }

    #[test]
    fn decodes_flat_data_shape() {
        let body = json!({
            "data": [row("Garrett Winters", "Accountant", "Tokyo",
                         json!("2"), "2011/07/25", "$170,750")]
        })
        .to_string();

        let employees = decode_employees(&body).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 2, "string id decodes too");
        assert_eq!(employees[0].city, "Tokyo");
    }

    #[test]
    fn nested_shape_wins_when_both_are_present() {
        let body = json!({
            "TABLE_DATA": { "data": [row("A", "D", "C", json!(1), "2020/01/01", "$1")] },
            "data": [row("B", "D", "C", json!(2), "2020/01/01", "$2")]
        })
        .to_string();

        let employees = decode_employees(&body).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].username, "A");
    }

    #[test]
    fn missing_rows_decode_to_empty_list() {
        assert_eq!(decode_employees("{}").unwrap(), Vec::new());
        assert_eq!(
            decode_employees(r#"{"TABLE_DATA":{"data":[]}}"#).unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn non_json_body_is_a_bad_envelope() {
        assert!(matches!(
            decode_employees("<html>oops</html>"),
            Err(ProtocolError::BadEnvelope(_))
        ));
    }

    // =========================================================
    // 行解码
    // =========================================================

    #[test]
    fn short_row_reports_index_and_len() {
        let body = json!({ "data": [["only", "three", "fields"]] }).to_string();
        assert_eq!(
            decode_employees(&body),
            Err(ProtocolError::ShortRow { row: 0, len: 3 })
        );
    }

    #[test]
    fn malformed_salary_is_an_error_not_nan() {
        let body = json!({
            "data": [row("X", "D", "C", json!(5), "2020/01/01", "not a number")]
        })
        .to_string();
        assert_eq!(
            decode_employees(&body),
            Err(ProtocolError::BadSalary {
                row: 0,
                raw: "not a number".to_string()
            })
        );
    }

    #[test]
    fn error_names_the_offending_row() {
        let body = json!({
            "data": [
                row("Ok", "D", "C", json!(1), "2020/01/01", "$100"),
                row("Bad", "D", "C", json!([]), "2020/01/01", "$100"),
            ]
        })
        .to_string();
        assert_eq!(
            decode_employees(&body),
            Err(ProtocolError::BadField {
                row: 1,
                field: "id"
            })
        );
    }

    // =========================================================
    // 工资解析
    // =========================================================

    #[test]
    fn parse_salary_strips_currency_formatting() {
        assert_eq!(parse_salary("$320,800"), Some(320_800.0));
        assert_eq!(parse_salary("$86,000.50"), Some(86_000.5));
        assert_eq!(parse_salary("  1200 USD "), Some(1200.0));
        assert_eq!(parse_salary("-$500"), Some(-500.0));
    }

    #[test]
    fn parse_salary_rejects_garbage() {
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("free"), None);
        assert_eq!(parse_salary("$-"), None);
        assert_eq!(parse_salary("1.2.3"), None);
    }
}
