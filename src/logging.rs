//! 로그 초기화
//!
//! 진행 상황은 println 으로 표준출력에, 진단 로그는 tracing 으로 표준에러에 쓴다.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG 가 없을 때의 필터
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!(
        "exhibit_recon={level},exhibit_recon_common={level},reqwest=warn,hyper_util=warn"
    )
}

/// 전역 subscriber 설치 (두 번째 호출은 무시)
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(true).contains("exhibit_recon=debug"));
        assert!(default_filter(false).contains("exhibit_recon_common=info"));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
