//! Composition of the browser-side runtime script.

use webnotice_common::VERSION_GLOBAL;
use webnotice_config::NoticeConfig;

use crate::error::BuildError;

/// Name of the entry function the runtime script template must define.
///
/// The composed trailer invokes it with the serialized options object after
/// setting the page-global version.
pub const SCRIPT_ENTRY_FUNCTION: &str = "webUpdateCheck_checkAndNotice";

/// Composes the publishable runtime script from a template.
///
/// A pure text transform: the template is emitted verbatim, followed by a
/// trailer that bakes in the resolved version and starts the poller with the
/// JSON-serialized configuration. No I/O happens here, so a fixed input
/// always yields a fixed output — which is also what makes the composed
/// payload safe to content-hash.
pub fn compose(
    template: &str,
    version: &str,
    config: &NoticeConfig,
) -> Result<String, BuildError> {
    let options = serde_json::to_string(config).map_err(|e| BuildError::Serialize {
        what: "runtime options",
        reason: e.to_string(),
    })?;
    Ok(format!(
        "{template}\nwindow.{VERSION_GLOBAL} = '{}';\n{SCRIPT_ENTRY_FUNCTION}({options});\n",
        js_single_quoted(version)
    ))
}

/// Escapes a string for embedding inside a single-quoted JS literal.
pub(crate) fn js_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_emitted_verbatim() {
        let composed = compose("function webUpdateCheck_checkAndNotice(o) {}", "v1", &NoticeConfig::default())
            .unwrap();
        assert!(composed.starts_with("function webUpdateCheck_checkAndNotice(o) {}"));
    }

    #[test]
    fn trailer_sets_version_and_starts_poller() {
        let composed = compose("// template", "abc123", &NoticeConfig::default()).unwrap();
        assert!(composed.contains("window.pluginWebUpdateNotice_version = 'abc123';"));
        assert!(composed.contains("webUpdateCheck_checkAndNotice({"));
    }

    #[test]
    fn options_carry_polling_configuration() {
        let config = NoticeConfig {
            check_interval: 5_000,
            hidden_dismiss_button: true,
            ..NoticeConfig::default()
        };
        let composed = compose("// t", "v1", &config).unwrap();
        assert!(composed.contains("\"check_interval\":5000"));
        assert!(composed.contains("\"hidden_dismiss_button\":true"));
    }

    #[test]
    fn fixed_input_fixed_output() {
        let config = NoticeConfig::default();
        let a = compose("// t", "v1", &config).unwrap();
        let b = compose("// t", "v1", &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn snapshot_of_minimal_composition() {
        let config = NoticeConfig {
            log_version: false,
            ..NoticeConfig::default()
        };
        let composed = compose("//x", "v1", &config).unwrap();
        let expected = "//x\nwindow.pluginWebUpdateNotice_version = 'v1';\nwebUpdateCheck_checkAndNotice({\"version_type\":\"commit-hash\",\"check_interval\":600000,\"log_version\":false,\"silence\":false,\"notification\":{},\"hidden_default_notification\":false,\"hidden_dismiss_button\":false});\n";
        assert_eq!(composed, expected);
    }

    #[test]
    fn version_with_quote_is_escaped() {
        let composed = compose("//x", "it's", &NoticeConfig::default()).unwrap();
        assert!(composed.contains("window.pluginWebUpdateNotice_version = 'it\\'s';"));
    }
}
