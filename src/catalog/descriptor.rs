//! Primary descriptor (`.project`) parsing.
//!
//! The descriptor is a small XML document whose top-level `<name>`
//! element declares the unit id:
//!
//! ```xml
//! <projectDescription>
//!   <name>org.example.core</name>
//!   ...
//! </projectDescription>
//! ```
//!
//! Only the `<name>` directly under the document root counts; build
//! commands nest their own `<name>` elements deeper down.

use anyhow::{bail, Context};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract the declared unit id from `.project` XML content.
pub(crate) fn unit_id(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut depth = 0usize;
    let mut in_name = false;

    loop {
        match reader.read_event().context("invalid XML")? {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.local_name().as_ref() == b"name" {
                    in_name = true;
                }
            }
            Event::End(_) => {
                in_name = false;
                depth = depth.saturating_sub(1);
            }
            Event::Text(text) if in_name => {
                let id = text.unescape().context("invalid XML text")?.trim().to_string();
                if !id.is_empty() {
                    return Ok(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    bail!("descriptor declares no project name")
}
