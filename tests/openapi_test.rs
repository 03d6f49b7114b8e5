//! Integration tests for OpenAPI document generation.

use std::sync::Arc;

use reqschema::{Info, OasBuilder, Operation, Parameter, Schema};
use serde_json::json;

fn info() -> Info {
    Info::new("test-api", "1.0.0")
}

// === Document Skeleton Tests ===

mod document {
    use super::*;

    #[test]
    fn empty_builder_emits_skeleton() {
        let doc = OasBuilder::new(info(), Vec::new()).build();
        assert_eq!(
            doc,
            json!({
                "openapi": "3.0.1",
                "info": { "title": "test-api", "version": "1.0.0" },
                "paths": {},
                "components": { "schemas": {} },
            })
        );
    }

    #[test]
    fn build_is_idempotent() {
        let builder = OasBuilder::new(
            info(),
            vec![Operation::get(
                "ping",
                "/ping",
                Vec::<(String, Parameter)>::new(),
                Arc::new(Schema::string()),
            )],
        );
        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn operations_sharing_a_path_merge_into_one_item() {
        let response = Arc::new(Schema::boolean());
        let doc = OasBuilder::new(
            info(),
            vec![
                Operation::get(
                    "getUser",
                    "/user",
                    Vec::<(String, Parameter)>::new(),
                    Arc::clone(&response),
                ),
                Operation::post(
                    "createUser",
                    "/user",
                    Vec::<(String, Parameter)>::new(),
                    Arc::clone(&response),
                ),
            ],
        )
        .build();

        let item = doc["paths"]["/user"].as_object().unwrap();
        assert_eq!(item.len(), 2);
        assert_eq!(item["get"]["operationId"], "getUser");
        assert_eq!(item["post"]["operationId"], "createUser");
    }

    #[test]
    fn duplicate_path_and_method_is_last_write_wins() {
        let response = Arc::new(Schema::boolean());
        let doc = OasBuilder::new(
            info(),
            vec![
                Operation::get(
                    "first",
                    "/thing",
                    Vec::<(String, Parameter)>::new(),
                    Arc::clone(&response),
                ),
                Operation::get(
                    "second",
                    "/thing",
                    Vec::<(String, Parameter)>::new(),
                    Arc::clone(&response),
                ),
            ],
        )
        .build();

        assert_eq!(doc["paths"]["/thing"]["get"]["operationId"], "second");
    }
}

// === Parameter Projection Tests ===

mod parameters {
    use super::*;

    #[test]
    fn path_parameter_with_named_response_ref() {
        let user = Arc::new(Schema::object([("id", Schema::string())]));
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "getUser",
                "/user/{id}",
                [("id", Parameter::path(Schema::string()))],
                Arc::clone(&user),
            )],
        )
        .named_response("User", user)
        .build();

        let operation = &doc["paths"]["/user/{id}"]["get"];
        assert_eq!(
            operation["parameters"],
            json!([{
                "required": true,
                "name": "id",
                "in": "path",
                "schema": { "type": "string" },
            }])
        );
        assert_eq!(
            operation["responses"]["200"]["content"]["application/json"]["schema"],
            json!({ "$ref": "#/components/schemas/User" })
        );
        assert_eq!(operation["responses"]["200"]["description"], "success");
    }

    #[test]
    fn path_parameters_are_required_even_when_optional() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "getUser",
                "/user/{id}",
                [("id", Parameter::path(Schema::string().optional()))],
                Arc::new(Schema::boolean()),
            )],
        )
        .build();

        let parameter = &doc["paths"]["/user/{id}"]["get"]["parameters"][0];
        assert_eq!(parameter["required"], true);
    }

    #[test]
    fn query_parameter_requiredness_follows_optional_flag() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "search",
                "/search",
                [
                    ("q", Parameter::query(Schema::string())),
                    ("page", Parameter::query(Schema::number().optional())),
                ],
                Arc::new(Schema::array(Schema::string())),
            )],
        )
        .build();

        let parameters = doc["paths"]["/search"]["get"]["parameters"]
            .as_array()
            .unwrap();
        assert_eq!(parameters[0]["name"], "q");
        assert_eq!(parameters[0]["required"], true);
        assert_eq!(parameters[0]["in"], "query");
        assert_eq!(parameters[1]["name"], "page");
        assert_eq!(parameters[1]["required"], false);
    }

    #[test]
    fn parameters_field_is_omitted_when_only_body_params_exist() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::post(
                "createUser",
                "/user",
                [("name", Parameter::body(Schema::string()))],
                Arc::new(Schema::boolean()),
            )],
        )
        .build();

        let operation = doc["paths"]["/user"]["post"].as_object().unwrap();
        assert!(!operation.contains_key("parameters"));
        assert!(operation.contains_key("requestBody"));
    }

    #[test]
    fn request_body_is_omitted_without_body_params() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "getUser",
                "/user/{id}",
                [("id", Parameter::path(Schema::string()))],
                Arc::new(Schema::boolean()),
            )],
        )
        .build();

        let operation = doc["paths"]["/user/{id}"]["get"].as_object().unwrap();
        assert!(!operation.contains_key("requestBody"));
    }

    #[test]
    fn body_parameters_merge_into_one_object_schema() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::post(
                "createThing",
                "/thing",
                [
                    ("a", Parameter::body(Schema::number())),
                    ("b", Parameter::body(Schema::string())),
                ],
                Arc::new(Schema::boolean()),
            )],
        )
        .build();

        let body = &doc["paths"]["/thing"]["post"]["requestBody"];
        assert_eq!(body["required"], true);
        assert_eq!(
            body["content"]["application/json"]["schema"],
            json!({
                "type": "object",
                "properties": {
                    "a": { "type": "number" },
                    "b": { "type": "string" },
                },
                "required": ["a", "b"],
            })
        );
    }

    #[test]
    fn optional_body_parameter_drops_out_of_required() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::post(
                "createThing",
                "/thing",
                [
                    ("a", Parameter::body(Schema::number())),
                    ("b", Parameter::body(Schema::string().optional())),
                ],
                Arc::new(Schema::boolean()),
            )],
        )
        .build();

        let schema =
            &doc["paths"]["/thing"]["post"]["requestBody"]["content"]["application/json"]["schema"];
        assert_eq!(schema["required"], json!(["a"]));
    }
}

// === Response Projection Tests ===

mod responses {
    use super::*;

    #[test]
    fn named_table_lookup_is_by_pointer_not_structure() {
        let registered = Arc::new(Schema::object([("id", Schema::string())]));
        // Structurally identical, but a different allocation: must inline.
        let lookalike = Arc::new(Schema::object([("id", Schema::string())]));

        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "getUser",
                "/user",
                Vec::<(String, Parameter)>::new(),
                lookalike,
            )],
        )
        .named_response("User", registered)
        .build();

        let schema =
            &doc["paths"]["/user"]["get"]["responses"]["200"]["content"]["application/json"]["schema"];
        assert!(schema.get("$ref").is_none());
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn scalar_response_inlines() {
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "ping",
                "/ping",
                Vec::<(String, Parameter)>::new(),
                Arc::new(Schema::string()),
            )],
        )
        .build();

        assert_eq!(
            doc["paths"]["/ping"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"],
            json!({ "type": "string" })
        );
    }

    #[test]
    fn components_render_every_named_schema() {
        let user = Arc::new(Schema::object([("id", Schema::string())]));
        let tags = Arc::new(Schema::array(Schema::string()));

        let doc = OasBuilder::new(info(), Vec::new())
            .named_responses([("User", user), ("Tags", tags)])
            .build();

        assert_eq!(
            doc["components"]["schemas"],
            json!({
                "User": {
                    "type": "object",
                    "properties": { "id": { "type": "string" } },
                    "required": ["id"],
                },
                "Tags": {
                    "type": "array",
                    "items": { "type": "string" },
                },
            })
        );
    }

    #[test]
    fn nullable_union_response_inlines_with_any_of() {
        let response = Arc::new(
            Schema::union([Schema::number(), Schema::string()]).nullable(),
        );
        let doc = OasBuilder::new(
            info(),
            vec![Operation::get(
                "mixed",
                "/mixed",
                Vec::<(String, Parameter)>::new(),
                response,
            )],
        )
        .build();

        assert_eq!(
            doc["paths"]["/mixed"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"],
            json!({
                "anyOf": [{ "type": "number" }, { "type": "string" }],
                "nullable": true,
            })
        );
    }
}
