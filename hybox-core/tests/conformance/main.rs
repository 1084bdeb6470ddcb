//! Conformance harness: envelope properties end to end.
//!
//! Coverage:
//! - Round trip for creator and every listed recipient
//! - Exclusion of keypairs not in the recipient set
//! - Tamper detection per blob region
//! - Byte layout and length arithmetic
//! - Reproducibility under injected entropy, freshness under OS entropy
//! - Parallel use from independent threads

mod exclusion;
mod layout;
mod roundtrip;
mod tamper;
