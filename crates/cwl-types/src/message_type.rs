// CloudWatch Logs subscription message types.
//
// Ordinary deliveries carry `DATA_MESSAGE`. When a subscription is first
// created the service sends a `CONTROL_MESSAGE` to check that the
// destination is reachable; it has the same shape, with a single event
// whose message describes the check.

/// Message type of a batch carrying ordinary log events.
pub const DATA_MESSAGE: &str = "DATA_MESSAGE";

/// Message type of a reachability check sent by the log service.
pub const CONTROL_MESSAGE: &str = "CONTROL_MESSAGE";
