//! Salesforce forms.

use toolwiz_core::Integration;

use crate::schema::{
    opt, ConnectionField as F, ConnectionTable, FieldSpec, OperationSpec, OperationTable, SectionSpec,
};

const OBJECT: FieldSpec = FieldSpec::text("object", "Salesforce Object")
    .required()
    .placeholder("Account, Contact, Lead, Opportunity, etc.");

const SOQL_QUERY: FieldSpec = FieldSpec::text_area("soqlQuery", "SOQL Query")
    .required()
    .placeholder("SELECT Id, Name, Email FROM Contact WHERE AccountId = '{account_id}'")
    .help("Use SOQL syntax. You can use placeholders like {account_id} that will be replaced at runtime.");

const FIELDS: FieldSpec = FieldSpec::json("fields", "Field Values (JSON)")
    .required()
    .placeholder(r#"{"Name": "John Doe", "Email": "john@example.com", "Phone": "555-1234"}"#)
    .help("JSON object with field names and values. For update, include the record ID.");

const RECORD_ID: FieldSpec = FieldSpec::text("recordId", "Record ID")
    .required()
    .placeholder("003000000000000AAA");

const SEARCH_QUERY: FieldSpec = FieldSpec::text("searchQuery", "Search Query")
    .required()
    .placeholder("FIND {search_term} IN ALL FIELDS RETURNING Account(Id, Name), Contact(Id, Name)");

const APEX_CLASS: FieldSpec = FieldSpec::text("apexClass", "Apex Class Name")
    .required()
    .placeholder("MyApexClass");

const APEX_METHOD: FieldSpec = FieldSpec::text("apexMethod", "Apex Method Name")
    .required()
    .placeholder("myMethod");

const PARAMETERS: FieldSpec = FieldSpec::json("parameters", "Parameters (JSON)")
    .placeholder(r#"{"param1": "value1", "param2": "value2"}"#);

/// Canvas-node operations.
pub static SALESFORCE_OPERATIONS: OperationTable = OperationTable {
    integration: Integration::Salesforce,
    title: "Salesforce Operation",
    operations: &[
        OperationSpec {
            value: "query",
            label: "Query Records (SOQL)",
            fields: &[OBJECT, SOQL_QUERY],
        },
        OperationSpec {
            value: "create",
            label: "Create Record",
            fields: &[OBJECT, FIELDS],
        },
        OperationSpec {
            value: "update",
            label: "Update Record",
            fields: &[OBJECT, FIELDS, RECORD_ID],
        },
        OperationSpec {
            value: "delete",
            label: "Delete Record",
            fields: &[OBJECT, RECORD_ID],
        },
        OperationSpec {
            value: "search",
            label: "Search Records",
            fields: &[OBJECT, SEARCH_QUERY],
        },
        OperationSpec {
            value: "get_by_id",
            label: "Get Record by ID",
            fields: &[OBJECT, RECORD_ID],
        },
        OperationSpec {
            value: "apex",
            label: "Call Apex Method",
            fields: &[APEX_CLASS, APEX_METHOD, PARAMETERS],
        },
    ],
};

const USERNAME: FieldSpec = FieldSpec::text("username", "Username")
    .required()
    .placeholder("Salesforce Username");

/// Tool-level connection settings.
pub static SALESFORCE_CONNECTION: ConnectionTable = ConnectionTable {
    integration: Integration::Salesforce,
    title: "Salesforce Configuration",
    banner: "Salesforce Integration",
    sections: &[
        SectionSpec {
            title: "Connection Settings",
            fields: &[
                F::always(
                    FieldSpec::url("instance_url", "Instance URL")
                        .required()
                        .placeholder("https://yourinstance.salesforce.com"),
                ),
                F::always(FieldSpec::select(
                    "environment",
                    "Environment",
                    &[
                        opt("production", "Production"),
                        opt("sandbox", "Sandbox"),
                        opt("custom", "Custom Domain"),
                    ],
                    "production",
                )),
                F::always(FieldSpec::select(
                    "api_version",
                    "API Version",
                    &[
                        opt("v59.0", "v59.0"),
                        opt("v58.0", "v58.0"),
                        opt("v57.0", "v57.0"),
                        opt("v56.0", "v56.0"),
                    ],
                    "v59.0",
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
                        opt("oauth", "OAuth 2.0 (Username/Password)"),
                        opt("oauth_jwt", "OAuth 2.0 (JWT Bearer)"),
                        opt("session_id", "Session ID"),
                        opt("access_token", "Access Token"),
                    ],
                    "oauth",
                )),
                F::when(USERNAME, "auth_type", &["oauth"]),
                F::when(
                    FieldSpec::password("password", "Password")
                        .required()
                        .placeholder("Salesforce Password"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::password("security_token", "Security Token")
                        .placeholder("Security Token (if required)"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::text("consumer_key", "Consumer Key (Client ID)")
                        .required()
                        .placeholder("Connected App Consumer Key"),
                    "auth_type",
                    &["oauth_jwt"],
                ),
                F::when(
                    FieldSpec::password("consumer_secret", "Consumer Secret (Client Secret)")
                        .required()
                        .placeholder("Connected App Consumer Secret"),
                    "auth_type",
                    &["oauth_jwt"],
                ),
                F::when(USERNAME, "auth_type", &["oauth_jwt"]),
                F::when(
                    FieldSpec::password("session_id", "Session ID")
                        .required()
                        .placeholder("Salesforce Session ID"),
                    "auth_type",
                    &["session_id"],
                ),
                F::when(
                    FieldSpec::password("access_token", "Access Token")
                        .required()
                        .placeholder("Salesforce Access Token"),
                    "auth_type",
                    &["access_token"],
                ),
            ],
        },
        SectionSpec {
            title: "API Settings",
            fields: &[
                F::always(FieldSpec::select(
                    "api_type",
                    "API Type",
                    &[
                        opt("rest", "REST API"),
                        opt("soap", "SOAP API"),
                        opt("bulk", "Bulk API"),
                        opt("streaming", "Streaming API"),
                    ],
                    "rest",
                )),
                F::always(
                    FieldSpec::text("default_object", "Default Object")
                        .placeholder("Account, Contact, Lead, etc."),
                ),
            ],
        },
    ],
};
