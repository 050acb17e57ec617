//! Tool schema validity tests.
//!
//! Every registered tool must carry a description and an object schema that
//! lists its required parameters with their types.

use serde_json::Value;

/// Validates that a JSON schema has the required structure.
fn validate_json_schema(schema: &Value) -> Result<(), String> {
    let obj = schema
        .as_object()
        .ok_or_else(|| "Schema must be an object".to_string())?;

    if let Some(type_val) = obj.get("type") {
        if type_val != "object" {
            return Err(format!("Expected type 'object', got {:?}", type_val));
        }
    }

    if let Some(properties) = obj.get("properties") {
        if !properties.is_object() {
            return Err("Properties must be an object".to_string());
        }
    }

    Ok(())
}

/// Validates that a tool has required fields.
fn validate_tool(tool: &rmcp::model::Tool) -> Result<(), String> {
    if tool.name.is_empty() {
        return Err("Tool name cannot be empty".to_string());
    }

    if tool.description.as_deref().is_none_or(str::is_empty) {
        return Err(format!("Tool '{}' must have a description", tool.name));
    }

    if tool.input_schema.is_empty() {
        return Err(format!("Tool '{}' must have an input schema", tool.name));
    }

    let schema_value = serde_json::to_value(&*tool.input_schema)
        .map_err(|e| format!("Failed to serialize schema: {}", e))?;
    validate_json_schema(&schema_value)
}

/// Names listed under `required`.
fn required_fields(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolors_mcp_image::{GENERATE_IMAGE_TOOL, GenerateImageToolParams, ImageServer, Resolution};
    use schemars::schema_for;
    use std::borrow::Cow;
    use std::sync::Arc;

    #[test]
    fn test_json_schema_validation() {
        let valid_schema = serde_json::json!({
            "type": "object",
            "properties": {"prompt": {"type": "string"}},
            "required": ["prompt"]
        });
        assert!(validate_json_schema(&valid_schema).is_ok());

        let invalid_schema = serde_json::json!({"type": "string"});
        assert!(validate_json_schema(&invalid_schema).is_err());
    }

    #[test]
    fn test_tool_validation() {
        let invalid_tool = rmcp::model::Tool {
            name: Cow::Borrowed("generate_image"),
            description: None,
            input_schema: Arc::new(serde_json::Map::new()),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        };
        assert!(validate_tool(&invalid_tool).is_err());
    }

    #[test]
    fn test_registered_tools_are_valid() {
        let tools = ImageServer::tools();
        assert_eq!(tools.len(), 1);
        for tool in &tools {
            validate_tool(tool).unwrap_or_else(|e| panic!("{}", e));
        }
        assert_eq!(tools[0].name, GENERATE_IMAGE_TOOL);
    }

    #[test]
    fn test_generate_image_schema_fields() {
        let schema = serde_json::to_value(schema_for!(GenerateImageToolParams)).unwrap();
        assert!(validate_json_schema(&schema).is_ok());

        let required = required_fields(&schema);
        assert!(required.contains(&"prompt".to_string()));
        assert!(required.contains(&"resolution".to_string()));
        assert!(!required.contains(&"seed".to_string()), "seed must be optional");

        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties["prompt"]["type"], "string");
        assert!(properties.contains_key("seed"));
    }

    #[test]
    fn test_resolution_schema_lists_every_value() {
        let schema = serde_json::to_value(schema_for!(Resolution)).unwrap();
        let text = schema.to_string();
        for resolution in Resolution::ALL {
            assert!(text.contains(resolution.as_str()), "schema is missing {}", resolution);
        }
    }
}
