//! Databricks forms.

use toolwiz_core::Integration;

use super::{CUSTOM_BODY, CUSTOM_METHOD};
use crate::schema::{
    opt, ConnectionField as F, ConnectionTable, FieldSpec, OperationSpec, OperationTable, SectionSpec,
};

const SQL_QUERY: FieldSpec = FieldSpec::text_area("sqlQuery", "SQL Query")
    .required()
    .placeholder("SELECT * FROM catalog.schema.table WHERE condition = 'value'");

const CATALOG: FieldSpec = FieldSpec::text("catalog", "Catalog").placeholder("main");
const SCHEMA: FieldSpec = FieldSpec::text("schema", "Schema").placeholder("default");

const NOTEBOOK_PATH: FieldSpec = FieldSpec::text("notebookPath", "Notebook Path")
    .required()
    .placeholder("/Users/username/notebook_name or /Shared/notebook_name");

const TABLE_NAME: FieldSpec = FieldSpec::text("tableName", "Table Name")
    .required()
    .placeholder("table_name");

const QUERY: FieldSpec = FieldSpec::text_area("query", "Query (WHERE clause or full query)")
    .placeholder("WHERE column = 'value' OR SELECT * FROM table WHERE...");

const TABLE_DEFINITION: FieldSpec = FieldSpec::json("tableDefinition", "Table Definition (JSON)")
    .required()
    .placeholder(r#"{"columns": [{"name": "id", "type": "bigint"}, {"name": "name", "type": "string"}]}"#)
    .help("JSON object defining table columns and their types.");

const JOB_ID: FieldSpec = FieldSpec::text("jobId", "Job ID")
    .required()
    .placeholder("123456789012345");

const PARAMETERS: FieldSpec = FieldSpec::json("parameters", "Parameters (JSON)")
    .placeholder(r#"{"param1": "value1", "param2": "value2"}"#);

const CUSTOM_ENDPOINT: FieldSpec = FieldSpec::text("customEndpoint", "Custom Endpoint")
    .required()
    .placeholder("/api/2.0/...");

/// Canvas-node operations.
pub static DATABRICKS_OPERATIONS: OperationTable = OperationTable {
    integration: Integration::Databricks,
    title: "Databricks Operation",
    operations: &[
        OperationSpec {
            value: "execute_sql",
            label: "Execute SQL Query",
            fields: &[SQL_QUERY, CATALOG, SCHEMA],
        },
        OperationSpec {
            value: "run_notebook",
            label: "Run Notebook",
            fields: &[NOTEBOOK_PATH, PARAMETERS],
        },
        OperationSpec {
            value: "query_table",
            label: "Query Table",
            fields: &[TABLE_NAME, CATALOG.required(), SCHEMA.required(), QUERY],
        },
        OperationSpec {
            value: "create_table",
            label: "Create Table",
            fields: &[TABLE_NAME, CATALOG.required(), SCHEMA.required(), TABLE_DEFINITION],
        },
        OperationSpec {
            value: "run_job",
            label: "Run Databricks Job",
            fields: &[JOB_ID, PARAMETERS],
        },
        OperationSpec {
            value: "custom",
            label: "Custom Operation",
            fields: &[CUSTOM_ENDPOINT, CUSTOM_METHOD, CUSTOM_BODY],
        },
    ],
};

/// Tool-level connection settings.
pub static DATABRICKS_CONNECTION: ConnectionTable = ConnectionTable {
    integration: Integration::Databricks,
    title: "Databricks Configuration",
    banner: "Databricks Integration",
    sections: &[
        SectionSpec {
            title: "Connection Settings",
            fields: &[
                F::always(
                    FieldSpec::url("workspace_url", "Workspace URL")
                        .required()
                        .placeholder("https://your-workspace.cloud.databricks.com"),
                ),
                F::always(FieldSpec::text("cluster_id", "Cluster ID").placeholder("1234-567890-abc123")),
                F::always(
                    FieldSpec::text("sql_warehouse_id", "SQL Warehouse ID")
                        .placeholder("Optional: SQL Warehouse ID"),
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
                        opt("token", "Personal Access Token"),
                        opt("oauth", "OAuth 2.0"),
                        opt("azure_client_secret", "Azure Client Secret"),
                        opt("aws_iam", "AWS IAM"),
                    ],
                    "token",
                )),
                F::when(
                    FieldSpec::password("access_token", "Personal Access Token")
                        .required()
                        .placeholder("dapi..."),
                    "auth_type",
                    &["token"],
                ),
                F::when(
                    FieldSpec::text("client_id", "Client ID").placeholder("OAuth Client ID"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::password("client_secret", "Client Secret").placeholder("OAuth Client Secret"),
                    "auth_type",
                    &["oauth"],
                ),
                F::when(
                    FieldSpec::text("azure_client_id", "Azure Client ID").placeholder("Azure Client ID"),
                    "auth_type",
                    &["azure_client_secret"],
                ),
                F::when(
                    FieldSpec::password("azure_client_secret", "Azure Client Secret")
                        .placeholder("Azure Client Secret"),
                    "auth_type",
                    &["azure_client_secret"],
                ),
                F::when(
                    FieldSpec::text("azure_tenant_id", "Azure Tenant ID").placeholder("Azure Tenant ID"),
                    "auth_type",
                    &["azure_client_secret"],
                ),
            ],
        },
        SectionSpec {
            title: "API Settings",
            fields: &[
                F::always(FieldSpec::select(
                    "api_version",
                    "API Version",
                    &[opt("2.0", "2.0"), opt("2.1", "2.1")],
                    "2.0",
                )),
                F::always(FieldSpec::text("default_catalog", "Default Catalog").placeholder("main")),
                F::always(FieldSpec::text("default_schema", "Default Schema").placeholder("default")),
            ],
        },
    ],
};
