//! Workday forms.

use toolwiz_core::Integration;

use super::{CUSTOM_BODY, CUSTOM_METHOD};
use crate::schema::{
    opt, ConnectionField as F, ConnectionTable, FieldSpec, OperationSpec, OperationTable, SectionSpec,
};

const REPORT_NAME: FieldSpec = FieldSpec::text("reportName", "Report Name")
    .required()
    .placeholder("Report name (e.g., Worker_Report, Payroll_Report)");

const REPORT_DATA: FieldSpec = FieldSpec::json("reportData", "Report Data (JSON)")
    .required()
    .placeholder(r#"{"field1": "value1", "field2": "value2"}"#);

const SERVICE_NAME: FieldSpec = FieldSpec::text("serviceName", "Service Name")
    .required()
    .placeholder("Web service name (e.g., Human_Resources, Financial_Management)");

const DOCUMENT_TYPE: FieldSpec = FieldSpec::text("documentType", "Document Type")
    .required()
    .placeholder("Document type (e.g., Worker_Document, Payroll_Document)");

const DOCUMENT_ID: FieldSpec = FieldSpec::text("documentId", "Document ID")
    .required()
    .placeholder("Document ID");

const DOCUMENT_DATA: FieldSpec = FieldSpec::json("documentData", "Document Data (JSON)")
    .required()
    .placeholder(r#"{"field1": "value1", "field2": "value2"}"#);

const CUSTOM_ENDPOINT: FieldSpec = FieldSpec::text("customEndpoint", "Custom Endpoint")
    .required()
    .placeholder("/ccx/service/customreport2/tenant/...");

const PARAMETERS: FieldSpec = FieldSpec::json("parameters", "Parameters (JSON)")
    .placeholder(r#"{"param1": "value1", "param2": "value2"}"#)
    .help("JSON object with parameter names and values for the report or web service.");

/// Canvas-node operations.
pub static WORKDAY_OPERATIONS: OperationTable = OperationTable {
    integration: Integration::Workday,
    title: "Workday Operation",
    operations: &[
        OperationSpec {
            value: "get_report",
            label: "Get Report",
            fields: &[REPORT_NAME, PARAMETERS],
        },
        OperationSpec {
            value: "put_report",
            label: "Put/Update Report",
            fields: &[REPORT_NAME, REPORT_DATA],
        },
        OperationSpec {
            value: "get_document",
            label: "Get Document",
            fields: &[DOCUMENT_TYPE, DOCUMENT_ID],
        },
        OperationSpec {
            value: "put_document",
            label: "Put/Update Document",
            fields: &[DOCUMENT_TYPE, DOCUMENT_DATA],
        },
        OperationSpec {
            value: "web_service",
            label: "Call Web Service",
            fields: &[SERVICE_NAME, PARAMETERS],
        },
        OperationSpec {
            value: "custom",
            label: "Custom Operation",
            fields: &[CUSTOM_ENDPOINT, CUSTOM_METHOD, CUSTOM_BODY],
        },
    ],
};

/// Tool-level connection settings.
pub static WORKDAY_CONNECTION: ConnectionTable = ConnectionTable {
    integration: Integration::Workday,
    title: "Workday Configuration",
    banner: "Workday Integration",
    sections: &[
        SectionSpec {
            title: "Connection Settings",
            fields: &[
                F::always(
                    FieldSpec::url("tenant_url", "Workday Tenant URL")
                        .required()
                        .placeholder("https://wd2-impl.workday.com"),
                ),
                F::always(FieldSpec::text("tenant_name", "Tenant Name").placeholder("Your Tenant Name")),
                F::always(FieldSpec::select(
                    "environment",
                    "Environment",
                    &[
                        opt("Implementation", "Implementation"),
                        opt("Sandbox", "Sandbox"),
                        opt("Production", "Production"),
                    ],
                    "Implementation",
                )),
            ],
        },
        SectionSpec {
            title: "Authentication",
            fields: &[
                F::always(FieldSpec::select(
                    "auth_type",
                    "Auth Type",
                    &[
                        opt("oauth", "OAuth 2.0"),
                        opt("basic", "Basic Authentication"),
                        opt("certificate", "Certificate"),
                    ],
                    "oauth",
                )),
                F::when(
                    FieldSpec::text("client_id", "Client ID")
                        .required()
                        .placeholder("OAuth Client ID"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::password("client_secret", "Client Secret")
                        .required()
                        .placeholder("OAuth Client Secret"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::password("refresh_token", "Refresh Token")
                        .placeholder("OAuth Refresh Token (optional)"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::text("username", "Username")
                        .required()
                        .placeholder("Workday Username"),
                    "auth_type",
                    &["basic"],
                ),
                F::when(
                    FieldSpec::password("password", "Password")
                        .required()
                        .placeholder("Workday Password"),
                    "auth_type",
                    &["basic"],
                ),
            ],
        },
        SectionSpec {
            title: "API Settings",
            fields: &[
                F::always(FieldSpec::select(
                    "api_version",
                    "API Version",
                    &[
                        opt("v40.0", "v40.0"),
                        opt("v39.0", "v39.0"),
                        opt("v38.0", "v38.0"),
                        opt("v37.0", "v37.0"),
                    ],
                    "v40.0",
                )),
                F::always(
                    FieldSpec::text("service_name", "Service Name")
                        .placeholder("Human_Resources, Financial_Management, etc."),
                ),
                F::always(FieldSpec::select(
                    "report_format",
                    "Report Format",
                    &[opt("json", "JSON"), opt("xml", "XML"), opt("csv", "CSV")],
                    "json",
                )),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use toolwiz_core::ConfigMap;

    #[test]
    fn test_document_operations_diverge_on_second_field() {
        let get: Vec<_> = WORKDAY_OPERATIONS.visible_fields("get_document").iter().map(|f| f.key).collect();
        let put: Vec<_> = WORKDAY_OPERATIONS.visible_fields("put_document").iter().map(|f| f.key).collect();
        assert_eq!(get, vec!["documentType", "documentId"]);
        assert_eq!(put, vec!["documentType", "documentData"]);
    }

    #[test]
    fn test_report_parameters_optional_report_data_required() {
        let get_report = WORKDAY_OPERATIONS.operation("get_report").unwrap();
        assert!(!get_report.fields[1].required);
        let put_report = WORKDAY_OPERATIONS.operation("put_report").unwrap();
        assert!(put_report.fields[1].required);
        assert_eq!(put_report.fields[1].default, "{}");
    }

    #[test]
    fn test_basic_auth_reveals_username_and_password() {
        let config: ConfigMap = [("auth_type", "basic")].into_iter().collect();
        let visible: Vec<_> = WORKDAY_CONNECTION
            .fields()
            .filter(|f| WORKDAY_CONNECTION.is_visible(f, &config))
            .map(|f| f.spec.key)
            .collect();
        assert!(visible.contains(&"username"));
        assert!(visible.contains(&"password"));
        assert!(!visible.contains(&"client_id"));
    }
}
