use crate::core::data::Fields;
use crate::utils::error::{AppError, AppResult};

/// Parse `key=value` arguments into template fields
pub fn parse_variables(var_args: &[String]) -> AppResult<Fields> {
    let mut fields = Fields::new();

    for var in var_args {
        match var.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                fields.insert(key.trim(), value);
            }
            _ => {
                return Err(AppError::Config(format!(
                    "Invalid variable format: {}. Expected key=value",
                    var
                )));
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let args = vec![
            "product_category =Ceramics".to_string(),
            "note=a=b".to_string(),
            "buyer_message=  keep my spacing ".to_string(),
        ];
        let fields = parse_variables(&args).unwrap();
        assert_eq!(fields.get("product_category"), Some("Ceramics"));
        assert_eq!(fields.get("note"), Some("a=b"));
        assert_eq!(fields.get("buyer_message"), Some("  keep my spacing "));
    }

    #[test]
    fn test_parse_variables_rejects_bad_format() {
        assert!(parse_variables(&["no_equals".to_string()]).is_err());
        assert!(parse_variables(&["=value".to_string()]).is_err());
        assert!(parse_variables(&[]).unwrap().is_empty());
    }
}
