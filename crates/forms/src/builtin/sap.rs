//! SAP forms.

use toolwiz_core::Integration;

use super::{CUSTOM_BODY, CUSTOM_METHOD};
use crate::schema::{
    opt, ConnectionField as F, ConnectionTable, FieldSpec, OperationSpec, OperationTable, SectionSpec,
};

const FUNCTION_NAME: FieldSpec = FieldSpec::text("functionName", "Function Name")
    .required()
    .placeholder("RFC_FUNCTION_NAME or BAPI_FUNCTION_NAME");

const ODATA_ENTITY: FieldSpec = FieldSpec::text("odataEntity", "OData Entity")
    .required()
    .placeholder("EntitySetName (e.g., SalesOrderSet, MaterialSet)");

const ODATA_QUERY: FieldSpec = FieldSpec::text_area("odataQuery", "OData Query")
    .required()
    .placeholder("$filter=Field eq 'value'&$select=Field1,Field2&$top=10")
    .help("OData query parameters ($filter, $select, $orderby, $top, etc.)");

const RECORD_ID: FieldSpec = FieldSpec::text("recordId", "Record ID / Key")
    .required()
    .placeholder("Record key or ID");

const IDOC_TYPE: FieldSpec = FieldSpec::text("idocType", "IDoc Type")
    .required()
    .placeholder("IDoc type (e.g., ORDERS05, INVOIC02)");

const IDOC_DATA: FieldSpec = FieldSpec::text_area("idocData", "IDoc Data (JSON/XML)")
    .required()
    .placeholder("IDoc data in JSON or XML format");

const CUSTOM_ENDPOINT: FieldSpec = FieldSpec::text("customEndpoint", "Custom Endpoint")
    .required()
    .placeholder("/sap/opu/odata/sap/... or custom path");

const PARAMETERS: FieldSpec = FieldSpec::json("parameters", "Parameters (JSON)")
    .required()
    .placeholder(r#"{"PARAM1": "value1", "PARAM2": "value2"}"#)
    .help("JSON object with parameter names and values. For OData create/update, this represents the entity fields.");

/// Canvas-node operations.
pub static SAP_OPERATIONS: OperationTable = OperationTable {
    integration: Integration::Sap,
    title: "SAP Operation",
    operations: &[
        OperationSpec {
            value: "rfc",
            label: "RFC Function Call",
            fields: &[FUNCTION_NAME, PARAMETERS],
        },
        OperationSpec {
            value: "odata_query",
            label: "OData Query",
            fields: &[ODATA_ENTITY, ODATA_QUERY],
        },
        OperationSpec {
            value: "odata_create",
            label: "OData Create",
            fields: &[ODATA_ENTITY, PARAMETERS],
        },
        OperationSpec {
            value: "odata_update",
            label: "OData Update",
            fields: &[ODATA_ENTITY, RECORD_ID, PARAMETERS],
        },
        OperationSpec {
            value: "odata_delete",
            label: "OData Delete",
            fields: &[ODATA_ENTITY, RECORD_ID],
        },
        OperationSpec {
            value: "bapi",
            label: "BAPI Function Call",
            fields: &[FUNCTION_NAME, PARAMETERS],
        },
        OperationSpec {
            value: "idoc",
            label: "Process IDoc",
            fields: &[IDOC_TYPE, IDOC_DATA],
        },
        OperationSpec {
            value: "custom",
            label: "Custom Operation",
            fields: &[CUSTOM_ENDPOINT, CUSTOM_METHOD, CUSTOM_BODY],
        },
    ],
};

/// Tool-level connection settings.
pub static SAP_CONNECTION: ConnectionTable = ConnectionTable {
    integration: Integration::Sap,
    title: "SAP Configuration",
    banner: "SAP Integration",
    sections: &[
        SectionSpec {
            title: "Connection Settings",
            fields: &[
                F::always(
                    FieldSpec::url("system_url", "SAP System URL")
                        .required()
                        .placeholder("https://your-sap-system.com"),
                ),
                F::always(FieldSpec::text("system_number", "System Number").placeholder("00")),
                F::always(FieldSpec::text("client", "Client").placeholder("100")),
                F::always(
                    FieldSpec::text("application_server", "Application Server")
                        .placeholder("sap-server.example.com"),
                ),
            ],
        },
        SectionSpec {
            title: "Authentication",
            fields: &[
                F::always(FieldSpec::select(
                    "auth_type",
                    "Auth Type",
                    &[
                        opt("basic", "Basic Authentication"),
                        opt("sso", "Single Sign-On (SSO)"),
                        opt("certificate", "Certificate"),
                        opt("oauth", "OAuth 2.0"),
                    ],
                    "basic",
                )),
                F::always(FieldSpec::text("username", "Username").placeholder("SAP Username")).credential(),
                F::always(FieldSpec::password("password", "Password").placeholder("SAP Password")).credential(),
                F::when(
                    FieldSpec::url("oauth_token_endpoint", "OAuth Token Endpoint")
                        .placeholder("https://your-sap-system.com/oauth/token"),
                    "auth_type",
                    &["oauth"],
                ),
            ],
        },
        SectionSpec {
            title: "API Settings",
            fields: &[
                F::always(FieldSpec::text("rfc_destination", "RFC Destination").placeholder("RFC_DEST")),
                F::always(FieldSpec::select(
                    "api_version",
                    "API Version",
                    &[
                        opt("v1", "v1"),
                        opt("v2", "v2"),
                        opt("odata_v2", "OData v2"),
                        opt("odata_v4", "OData v4"),
                    ],
                    "v1",
                )),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use toolwiz_core::ConfigMap;

    fn keys(operation: &str) -> Vec<&'static str> {
        SAP_OPERATIONS
            .visible_fields(operation)
            .iter()
            .map(|f| f.key)
            .collect()
    }

    #[test]
    fn test_odata_operations_share_entity() {
        assert_eq!(keys("odata_query"), vec!["odataEntity", "odataQuery"]);
        assert_eq!(keys("odata_update"), vec!["odataEntity", "recordId", "parameters"]);
        assert_eq!(keys("odata_delete"), vec!["odataEntity", "recordId"]);
    }

    #[test]
    fn test_function_calls_require_parameters() {
        for op in ["rfc", "bapi"] {
            assert_eq!(keys(op), vec!["functionName", "parameters"]);
        }
        assert!(PARAMETERS.required);
    }

    #[test]
    fn test_custom_operation_defaults() {
        assert_eq!(SAP_OPERATIONS.default_for("customMethod"), "GET");
        assert_eq!(SAP_OPERATIONS.default_for("customBody"), "");
        assert_eq!(SAP_OPERATIONS.default_for("parameters"), "{}");
    }

    #[test]
    fn test_summary_leaves_out_credentials() {
        let config: ConfigMap = [
            ("system_url", "https://sap.example.com"),
            ("username", "alice"),
            ("password", "hunter2"),
        ]
        .into_iter()
        .collect();
        let summary = SAP_CONNECTION.summary("ERP", &config);

        assert_eq!(summary["type"], "sap");
        assert_eq!(summary["system_url"], "https://sap.example.com");
        assert_eq!(summary["auth_type"], "basic");
        assert_eq!(summary["api_version"], "v1");
        assert!(summary.get("username").is_none());
        assert!(summary.get("password").is_none());
    }
}
