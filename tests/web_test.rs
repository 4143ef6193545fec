//! Router-level integration: real temp directories, fake collaborators,
//! requests driven through `tower::ServiceExt::oneshot`.

mod common;

use std::collections::HashMap;
use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;

use common::{FAKE_PNG, fake_toolchain, fake_toolchain_with_aliases};
use mediabox::config::Config;
use mediabox::tools::Toolchain;
use mediabox::vfs::{IgnoreRules, RootTable};
use mediabox::web::server::router;
use mediabox::web::state::AppState;

/// A gallery root `media` populated with one of everything.
fn build_gallery() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let media = tmp.path().join("media");
    std::fs::create_dir_all(media.join("sub")).unwrap();
    std::fs::write(media.join("b.jpg"), b"jpeg-bytes").unwrap();
    std::fs::write(media.join("a.tmp"), b"scratch").unwrap();
    std::fs::write(media.join("clip.mp4"), b"mp4-bytes").unwrap();
    std::fs::write(media.join("notes.md"), b"# Heading\n\nbody text\n").unwrap();
    std::fs::write(media.join("plain.txt"), b"plain text").unwrap();
    std::fs::write(media.join("__option_R2L__"), b"").unwrap();
    std::fs::write(media.join("sub").join("pic.png"), b"png-bytes").unwrap();
    tmp
}

fn build_app(tmp: &TempDir, tools: Toolchain) -> Router {
    let media = tmp.path().join("media");

    let mut config = Config::default();
    config.gallery.roots = vec![media.clone()];
    config.gallery.ignores = vec!["*.tmp".to_string()];

    let roots = RootTable::resolve(&config.gallery.roots).unwrap();
    let ignores = IgnoreRules::compile(&config.gallery.ignores).unwrap();

    router(AppState::new(config, roots, ignores, tools))
}

async fn get_response(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    use tower::util::ServiceExt;

    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn test_site_root_lists_roots() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("media"));
}

#[tokio::test]
async fn test_listing_applies_ignore_rules() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, body) = get_response(&app, "/media/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("b.jpg"));
    assert!(html.contains("sub"));
    assert!(!html.contains("a.tmp"));
    assert!(!html.contains("__option_R2L__"));
}

#[tokio::test]
async fn test_listing_decorates_links() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (_, _, body) = get_response(&app, "/media/").await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("b.jpg.image.html"));
    assert!(html.contains("clip.mp4.movie.html"));
    assert!(html.contains("b.jpg.icon"));
}

#[tokio::test]
async fn test_directory_without_slash_redirects() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, _) = get_response(&app, "/media").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_image_page_renders() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/media/b.jpg.image.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("b.jpg"));
}

#[tokio::test]
async fn test_movie_page_points_at_stream() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, body) = get_response(&app, "/media/clip.mp4.movie.html").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<video"));
    assert!(html.contains("src=\"/media/clip.mp4\""));
}

#[tokio::test]
async fn test_mp4_streams_directly() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/media/clip.mp4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("video/mp4"));
    assert_eq!(body, b"mp4-bytes");
}

#[tokio::test]
async fn test_icon_suffix_delivers_png() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/media/b.jpg.icon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(body, FAKE_PNG);
}

#[tokio::test]
async fn test_icon_prefix_route() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/icon/media/b.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(body, FAKE_PNG);
}

#[tokio::test]
async fn test_directory_icon() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, _) = get_response(&app, "/media/sub.icon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
}

#[tokio::test]
async fn test_markdown_renders_html() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, content_type, body) = get_response(&app, "/media/notes.md").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<h1>"));
    assert!(html.contains("Heading"));
}

#[tokio::test]
async fn test_raw_file_delivery() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, body) = get_response(&app, "/media/plain.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"plain text");
}

#[tokio::test]
async fn test_image_with_unreadable_dimensions_serves_original() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    // "b.jpg" holds junk, so the dimension probe fails and delivery falls
    // back to the file as-is.
    let (status, _, body) = get_response(&app, "/media/b.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"jpeg-bytes");
}

#[tokio::test]
async fn test_traversal_is_not_found() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, _) = get_response(&app, "/media/../../etc/passwd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get_response(&app, "/media/%2e%2e/%2e%2e/etc/passwd").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sentinel_direct_request_is_not_found() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, _) = get_response(&app, "/media/__option_R2L__").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deep_link_to_ignored_file_still_serves() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    // "a.tmp" is hidden from listings but resolvable by exact name.
    let (status, _, body) = get_response(&app, "/media/a.tmp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"scratch");
}

#[tokio::test]
async fn test_unknown_paths_are_not_found() {
    let tmp = build_gallery();
    let app = build_app(&tmp, fake_toolchain());

    let (status, _, _) = get_response(&app, "/books/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get_response(&app, "/media/absent.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_alias_redirect_and_block() {
    let tmp = build_gallery();
    let media = tmp.path().join("media");
    let root = RootTable::resolve(&[media.clone()]).unwrap();
    let real_root = root.get("media").unwrap().to_path_buf();

    let outside = tmp.path().join("elsewhere");
    std::fs::create_dir(&outside).unwrap();
    std::fs::write(media.join("good-link"), b"alias").unwrap();
    std::fs::write(media.join("bad-link"), b"alias").unwrap();

    let targets = HashMap::from([
        (real_root.join("good-link"), real_root.join("sub")),
        (real_root.join("bad-link"), PathBuf::from(&outside)),
    ]);
    let app = build_app(&tmp, fake_toolchain_with_aliases(targets));

    let (status, _, _) = get_response(&app, "/media/good-link").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (status, _, _) = get_response(&app, "/media/bad-link").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_escaped_names_round_trip() {
    let tmp = build_gallery();
    let media = tmp.path().join("media");
    std::fs::write(media.join("two words.txt"), b"spaced").unwrap();
    let app = build_app(&tmp, fake_toolchain());

    let (_, _, body) = get_response(&app, "/media/").await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("two%20words.txt"));

    let (status, _, body) = get_response(&app, "/media/two%20words.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"spaced");
}
