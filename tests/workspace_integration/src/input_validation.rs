//! Input parameter validation tests.
//!
//! Invalid tool arguments must be rejected as invalid params before any
//! upstream request is made.

/// Base URL nothing listens on. Validation failures never get this far.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9/v1";

#[cfg(test)]
mod tests {
    use super::*;
    use kolors_mcp_common::Config;
    use kolors_mcp_image::{GenerationRequest, ImageServer, Resolution};
    use proptest::prelude::*;
    use rmcp::model::ErrorCode;
    use serde_json::{Value, json};

    fn server() -> ImageServer {
        ImageServer::new(Config::new("sk-test").with_base_url(UNREACHABLE_BASE_URL))
    }

    #[test]
    fn test_rejects_missing_and_blank_prompt() {
        assert!(GenerationRequest::parse(&json!({"resolution": "1024x1024"})).is_err());
        assert!(GenerationRequest::parse(&json!({"prompt": "", "resolution": "1024x1024"})).is_err());
        assert!(GenerationRequest::parse(&json!({"prompt": " \t\n", "resolution": "1024x1024"})).is_err());
    }

    #[test]
    fn test_rejects_unknown_resolution() {
        let err = GenerationRequest::parse(&json!({"prompt": "a cat", "resolution": "512x512"})).unwrap_err();
        assert_eq!(err.field, "resolution");
    }

    #[test]
    fn test_rejects_non_object_arguments() {
        for args in [Value::Null, json!([]), json!("a cat"), json!(42)] {
            assert!(GenerationRequest::parse(&args).is_err(), "{} should be rejected", args);
        }
    }

    #[test]
    fn test_seed_acceptance() {
        for seed in [json!(0), json!(12345)] {
            let request = GenerationRequest::parse(&json!({
                "prompt": "a cat", "resolution": "1024x1024", "seed": seed
            }))
            .unwrap();
            assert!(request.seed().is_some());
        }
        for seed in [json!(-1), json!(3.5), json!("abc")] {
            let result = GenerationRequest::parse(&json!({
                "prompt": "a cat", "resolution": "1024x1024", "seed": seed
            }));
            assert!(result.is_err(), "seed {} should be rejected", seed);
        }
    }

    #[tokio::test]
    async fn test_server_maps_rejection_to_invalid_params() {
        let server = server();
        let args = json!({"prompt": "a cat", "resolution": "1x1"});
        let err = server
            .generate_image(args.as_object().cloned())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(server.history().is_empty().await);
    }

    proptest! {
        #[test]
        fn any_supported_resolution_with_text_prompt_is_accepted(
            prompt in "[a-zA-Z][a-zA-Z ]{0,40}",
            index in 0usize..5,
            seed in proptest::option::of(any::<u64>()),
        ) {
            let resolution = Resolution::ALL[index];
            let mut args = json!({"prompt": prompt, "resolution": resolution.as_str()});
            if let Some(seed) = seed {
                args["seed"] = json!(seed);
            }

            let request = GenerationRequest::parse(&args).unwrap();
            prop_assert_eq!(request.resolution(), resolution);
            prop_assert_eq!(request.seed(), seed);
            prop_assert_eq!(request.prompt(), prompt.trim());
        }

        #[test]
        fn negative_seeds_are_rejected(seed in i64::MIN..0) {
            let args = json!({"prompt": "a cat", "resolution": "1024x1024", "seed": seed});
            prop_assert!(GenerationRequest::parse(&args).is_err());
        }
    }
}
