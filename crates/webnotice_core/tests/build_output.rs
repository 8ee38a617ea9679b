//! End-to-end tests for the directory-based build pipeline.
//!
//! These exercise the full flow a host build tool drives: publish the
//! manifest, stylesheet, and composed runtime script into an output
//! directory, then rewrite the HTML entry point to reference them.

use std::path::Path;

use webnotice_config::{NoticeConfig, VersionStrategy};
use webnotice_core::{pipeline, PollOutcome, PollerState, UpdateManifest};

fn custom_config(version: &str) -> NoticeConfig {
    NoticeConfig {
        version_type: VersionStrategy::Custom,
        custom_version: Some(version.to_string()),
        log_version: false,
        ..NoticeConfig::default()
    }
}

/// Collects the file names published under the asset directory.
fn published_files(out_dir: &Path) -> Vec<String> {
    let dir = out_dir.join("pluginWebUpdateNotice");
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn full_build_publishes_assets_and_rewrites_html() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(
        dist.path().join("index.html"),
        "<html><head></head><body><main>app</main></body></html>",
    )
    .unwrap();

    let report = pipeline::run(&custom_config("rel-42"), dist.path(), dist.path())
        .unwrap()
        .expect("enabled build must produce a report");

    assert_eq!(report.version, "rel-42");
    assert!(report.html_injected);
    assert_eq!(report.published.len(), 3);

    let files = published_files(dist.path());
    assert_eq!(files.len(), 3);
    assert!(files.contains(&"web_update_notice.json".to_string()));

    // The HTML references exactly the published hashed names.
    let html = std::fs::read_to_string(dist.path().join("index.html")).unwrap();
    for name in &files {
        if name.ends_with(".css") || name.ends_with(".js") {
            assert!(
                html.contains(&format!("/pluginWebUpdateNotice/{name}")),
                "HTML should reference {name}"
            );
        }
    }
    assert!(html.contains("window.pluginWebUpdateNotice_version = 'rel-42';"));
    assert!(html.contains("<div class=\"plugin-web-update-notice-anchor\"></div></body>"));
    assert!(html.contains("<main>app</main>"));
}

#[test]
fn manifest_on_disk_round_trips_into_the_poller_contract() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<html><head></head><body></body></html>")
        .unwrap();
    pipeline::run(&custom_config("v1"), dist.path(), dist.path()).unwrap();

    let manifest_path = dist
        .path()
        .join("pluginWebUpdateNotice/web_update_notice.json");
    let manifest: UpdateManifest =
        serde_json::from_str(&std::fs::read_to_string(manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.version, "v1");
    assert!(!manifest.silence);

    // A client that loaded the freshly built page sees no change; after the
    // next deployment it is notified exactly once.
    let mut poller = PollerState::new("v1");
    assert_eq!(poller.observe(&manifest), PollOutcome::NoChange);
    let next = UpdateManifest::new("v2", false);
    assert_eq!(poller.observe(&next), PollOutcome::Notify("v2".to_string()));
    assert_eq!(poller.observe(&next), PollOutcome::Suppressed);
}

#[test]
fn two_builds_with_different_content_use_different_asset_urls() {
    let dist_a = tempfile::tempdir().unwrap();
    let dist_b = tempfile::tempdir().unwrap();
    for dist in [&dist_a, &dist_b] {
        std::fs::write(
            dist.path().join("index.html"),
            "<html><head></head><body></body></html>",
        )
        .unwrap();
    }

    pipeline::run(&custom_config("v1"), dist_a.path(), dist_a.path()).unwrap();
    pipeline::run(&custom_config("v2"), dist_b.path(), dist_b.path()).unwrap();

    // The composed script embeds the version, so its hash (and filename)
    // must differ between the two builds while the manifest name stays fixed.
    let files_a = published_files(dist_a.path());
    let files_b = published_files(dist_b.path());
    let js_a = files_a.iter().find(|n| n.ends_with(".js")).unwrap();
    let js_b = files_b.iter().find(|n| n.ends_with(".js")).unwrap();
    assert_ne!(js_a, js_b);
    assert!(files_a.contains(&"web_update_notice.json".to_string()));
    assert!(files_b.contains(&"web_update_notice.json".to_string()));
}

#[test]
fn silent_deployment_is_marked_in_the_manifest() {
    let dist = tempfile::tempdir().unwrap();
    let config = NoticeConfig {
        silence: true,
        ..custom_config("v2")
    };
    pipeline::run(&config, dist.path(), dist.path()).unwrap();

    let manifest: UpdateManifest = serde_json::from_str(
        &std::fs::read_to_string(
            dist.path()
                .join("pluginWebUpdateNotice/web_update_notice.json"),
        )
        .unwrap(),
    )
    .unwrap();
    assert!(manifest.silence);

    let mut poller = PollerState::new("v1");
    assert_eq!(poller.observe(&manifest), PollOutcome::Suppressed);
}

#[test]
fn index_override_is_honored() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dist.path().join("public")).unwrap();
    std::fs::write(
        dist.path().join("public/app.html"),
        "<html><head></head><body></body></html>",
    )
    .unwrap();
    let config = NoticeConfig {
        index_file_path: Some("public/app.html".to_string()),
        ..custom_config("v1")
    };

    let report = pipeline::run(&config, dist.path(), dist.path())
        .unwrap()
        .unwrap();
    assert!(report.html_injected);
    let html = std::fs::read_to_string(dist.path().join("public/app.html")).unwrap();
    assert!(html.contains("window.pluginWebUpdateNotice_version = 'v1';"));
}
