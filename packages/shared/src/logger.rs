//! Logging setup utilities for the Agora chat server.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the default level when `RUST_LOG` is unset.
const APPLICATION_CRATES: [&str; 2] = ["agora_server", "agora_shared"];

/// Build the default filter directive for the given binary and level.
///
/// Binary names use `-` but tracing targets use `_`, so the name is normalized.
/// A binary sharing its name with an application crate is listed once.
pub fn default_directive(binary_name: &str, default_log_level: &str) -> String {
    let mut directives: Vec<String> = APPLICATION_CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, default_log_level))
        .collect();
    let binary_target = binary_name.replace('-', "_");
    if !APPLICATION_CRATES.contains(&binary_target.as_str()) {
        directives.push(format!("{}={}", binary_target, default_log_level));
    }
    directives.push(format!("tower_http={}", default_log_level));
    directives.join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "agora-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use agora_shared::logger::setup_logger;
///
/// setup_logger("agora-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_lists_binary_once() {
        // テスト項目: クレートと同名のバイナリはフィルタに一度だけ含まれる
        // given (前提条件):
        let binary_name = "agora-server";

        // when (操作):
        let directive = default_directive(binary_name, "info");

        // then (期待する結果):
        assert_eq!(
            directive,
            "agora_server=info,agora_shared=info,tower_http=info"
        );
    }

    #[test]
    fn test_default_directive_is_a_valid_filter() {
        // テスト項目: 生成したディレクティブを EnvFilter として解釈できる
        // given (前提条件):
        let directive = default_directive("custom-bin", "warn");

        // when (操作):
        let result = EnvFilter::try_new(&directive);

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(directive.contains("custom_bin=warn"));
    }
}
