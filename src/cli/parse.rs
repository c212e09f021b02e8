use campusnet_core::graph::NodeId;
use campusnet_core::registry::ClassCode;

/// Parse a location id from string
pub fn parse_node_id(s: &str) -> std::result::Result<NodeId, String> {
    s.parse::<NodeId>().map_err(|e| e.to_string())
}

/// Parse a class code from string
pub fn parse_class_code(s: &str) -> std::result::Result<ClassCode, String> {
    s.parse::<ClassCode>().map_err(|e| e.to_string())
}
