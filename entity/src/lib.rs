pub mod dependency_rule;
pub mod ecu;
pub mod update_package;
pub mod vehicle;
