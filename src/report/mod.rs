//! JSON report rendering.
//!
//! The report is an array with one single-key object per resolved project, keyed by
//! the project identifier, in discovery order:
//!
//! ```json
//! [
//!     {
//!         "maven:org.acme:child@1.0": [
//!             {
//!                 "identifier": "maven:org.acme:util@3.1",
//!                 "scope": "",
//!                 "type": "",
//!                 "snyk_url": "https://snyk.io/vuln/maven:org.acme:util@3.1",
//!                 "maven_url": "https://mvnrepository.com/artifact/maven/org.acme/util/3.1"
//!             }
//!         ]
//!     }
//! ]
//! ```
//!
//! Projects whose resolution failed are left out; their errors are reported separately.

use crate::core::PomError;
use crate::resolver::{Resolution, ResolvedDependency};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// A project identifier and its dependencies, serialized as `{identifier: [...]}`.
struct ProjectEntry<'a> {
    identifier: &'a str,
    dependencies: &'a [ResolvedDependency],
}

impl Serialize for ProjectEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.identifier, self.dependencies)?;
        map.end()
    }
}

/// Render the successfully resolved projects as a four-space indented JSON document.
pub fn render_json(resolution: &Resolution) -> Result<String, PomError> {
    let entries: Vec<ProjectEntry<'_>> = resolution
        .successes()
        .map(|(identifier, dependencies)| ProjectEntry {
            identifier,
            dependencies,
        })
        .collect();

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    entries.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| PomError::Other {
        message: format!("report is not valid UTF-8: {e}"),
    })
}
