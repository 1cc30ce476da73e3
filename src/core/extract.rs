use crate::domain::model::RawEmployee;
use crate::utils::error::{DirectoryError, Result};
use serde_json::Value;

pub const DEPARTMENTS_KEY: &str = "department_employees";
pub const EMPLOYEES_KEY: &str = "employees";

/// 解析原始 JSON 文字；失敗時回傳帶有解析器訊息的 `MalformedInput`
pub fn parse_payload(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| DirectoryError::malformed(&e))
}

/// Flattens `department_employees[*].employees[*]` into raw records, keeping
/// department order and employee order within each department.
///
/// Missing or mistyped containers are treated as empty. An employee that is
/// not an object yields a record with every field empty.
pub fn extract_employees(payload: &Value) -> Vec<RawEmployee> {
    let departments: &[Value] = match payload.get(DEPARTMENTS_KEY) {
        Some(Value::Array(departments)) => departments.as_slice(),
        _ => {
            tracing::debug!("No '{}' array in payload", DEPARTMENTS_KEY);
            &[]
        }
    };

    departments
        .iter()
        .flat_map(employees_of)
        .map(raw_employee)
        .collect()
}

fn employees_of(block: &Value) -> &[Value] {
    // null 或非物件的部門區塊，get 會回傳 None
    match block.get(EMPLOYEES_KEY) {
        Some(Value::Array(employees)) => employees.as_slice(),
        _ => &[],
    }
}

fn raw_employee(employee: &Value) -> RawEmployee {
    RawEmployee {
        contact_name: field_text(employee, "contact_name"),
        employee_position: field_text(employee, "employee_position"),
        office_number: field_text(employee, "office_number"),
        email_address: field_text(employee, "email_address"),
    }
}

/// 字串原樣取出；數字與布林取其 JSON 文字；其餘（缺少、null、陣列、物件）為空字串
fn field_text(employee: &Value, key: &str) -> String {
    match employee.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_preserves_department_then_employee_order() {
        let payload = json!({
            "department_employees": [
                {"employees": [{"contact_name": "A"}, {"contact_name": "B"}]},
                {"employees": [{"contact_name": "C"}]}
            ]
        });

        let names: Vec<String> = extract_employees(&payload)
            .into_iter()
            .map(|e| e.contact_name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_extract_tolerates_missing_and_mistyped_containers() {
        assert!(extract_employees(&json!({})).is_empty());
        assert!(extract_employees(&json!({"department_employees": null})).is_empty());
        assert!(extract_employees(&json!({"department_employees": {"employees": []}})).is_empty());
        assert!(extract_employees(&json!([1, 2, 3])).is_empty());
        assert!(extract_employees(&json!("not an object")).is_empty());

        let payload = json!({
            "department_employees": [
                null,
                {},
                {"employees": null},
                {"employees": "nope"},
                {"employees": [{"contact_name": "Only"}]}
            ]
        });
        let employees = extract_employees(&payload);
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].contact_name, "Only");
    }

    #[test]
    fn test_extract_defaults_missing_and_null_fields() {
        let payload = json!({
            "department_employees": [{"employees": [
                {"contact_name": "Jane", "employee_position": null}
            ]}]
        });

        let employees = extract_employees(&payload);
        assert_eq!(
            employees[0],
            RawEmployee {
                contact_name: "Jane".to_string(),
                ..RawEmployee::default()
            }
        );
    }

    #[test]
    fn test_extract_stringifies_scalar_fields() {
        let payload = json!({
            "department_employees": [{"employees": [
                {"contact_name": "Jane", "office_number": 5551234567u64, "email_address": ["x"]},
                42
            ]}]
        });

        let employees = extract_employees(&payload);
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].office_number, "5551234567");
        assert_eq!(employees[0].email_address, "");
        assert_eq!(employees[1], RawEmployee::default());
    }

    #[test]
    fn test_parse_payload_reports_malformed_input() {
        let err = parse_payload("not json").unwrap_err();
        match err {
            DirectoryError::MalformedInput { message } => assert!(!message.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
