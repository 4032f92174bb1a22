//! Built-in integration forms (Salesforce, SAP, Workday, Databricks).

mod databricks;
mod salesforce;
mod sap;
mod workday;

pub use databricks::{DATABRICKS_CONNECTION, DATABRICKS_OPERATIONS};
pub use salesforce::{SALESFORCE_CONNECTION, SALESFORCE_OPERATIONS};
pub use sap::{SAP_CONNECTION, SAP_OPERATIONS};
pub use workday::{WORKDAY_CONNECTION, WORKDAY_OPERATIONS};

use toolwiz_core::Integration;

use crate::schema::{opt, ConnectionTable, FieldSpec, OperationTable, SelectOption};

const HTTP_METHODS: &[SelectOption] = &[
    opt("GET", "GET"),
    opt("POST", "POST"),
    opt("PUT", "PUT"),
    opt("PATCH", "PATCH"),
    opt("DELETE", "DELETE"),
];

const CUSTOM_METHOD: FieldSpec = FieldSpec::select("customMethod", "HTTP Method", HTTP_METHODS, "GET").required();

// Unlike the other JSON fields the body starts out empty.
const CUSTOM_BODY: FieldSpec = FieldSpec::json("customBody", "Request Body (JSON)")
    .default_value("")
    .placeholder(r#"{"field": "value"}"#);

/// Canvas-node operation table of an integration.
pub fn operation_table(integration: Integration) -> &'static OperationTable {
    match integration {
        Integration::Salesforce => &SALESFORCE_OPERATIONS,
        Integration::Sap => &SAP_OPERATIONS,
        Integration::Workday => &WORKDAY_OPERATIONS,
        Integration::Databricks => &DATABRICKS_OPERATIONS,
    }
}

/// Tool-level connection table of an integration.
pub fn connection_table(integration: Integration) -> &'static ConnectionTable {
    match integration {
        Integration::Salesforce => &SALESFORCE_CONNECTION,
        Integration::Sap => &SAP_CONNECTION,
        Integration::Workday => &WORKDAY_CONNECTION,
        Integration::Databricks => &DATABRICKS_CONNECTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_their_integration() {
        for integration in Integration::ALL {
            assert_eq!(operation_table(integration).integration, integration);
            assert_eq!(connection_table(integration).integration, integration);
        }
    }

    #[test]
    fn test_custom_operation_is_shared() {
        for integration in [Integration::Sap, Integration::Workday, Integration::Databricks] {
            let keys: Vec<_> = operation_table(integration)
                .visible_fields("custom")
                .iter()
                .map(|f| f.key)
                .collect();
            assert_eq!(keys, vec!["customEndpoint", "customMethod", "customBody"]);
        }
        assert!(SALESFORCE_OPERATIONS.operation("custom").is_none());
    }

    #[test]
    fn test_every_connection_form_has_three_sections() {
        for integration in Integration::ALL {
            let titles: Vec<_> = connection_table(integration)
                .sections
                .iter()
                .map(|s| s.title)
                .collect();
            assert_eq!(titles, vec!["Connection Settings", "Authentication", "API Settings"]);
        }
    }
}
