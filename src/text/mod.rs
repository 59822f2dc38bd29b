//! Pure text pipeline for the article reader.
//!
//! Raw article text flows through three stages before it reaches the screen:
//! - [`wrap`] reflows it to the viewport width
//! - [`find_matches`] locates in-article search hits in the wrapped buffer
//! - [`plan`] merges search hits and URL spans into styled segments
//!
//! All offsets exchanged between the stages are character offsets into the
//! wrapped buffer, never byte offsets.

pub mod matches;
pub mod spans;
pub mod wrap;

pub use matches::{find_matches, line_of_offset};
pub use spans::{find_url_spans, plan, MatchSpan, Segment, SegmentStyle, SpanKind};
pub use wrap::wrap;
