//! Page markup.
//!
//! HTML is produced with maud at compile time; interpolation is escaped by
//! default, so entry names and titles are XSS-safe without further care.
//! Pre-escaped URLs and converted markdown go through `PreEscaped`
//! deliberately.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::views::{DirEntryView, FolderView, ImageVariant, ImageView, MarkdownView, MovieView};

const STYLE: &str = "\
body{font-family:sans-serif;margin:1.5rem;background:#fafafa;color:#222}\
h1{font-size:1.2rem}\
table{border-collapse:collapse;width:100%}\
td,th{padding:.3rem .6rem;text-align:left;border-bottom:1px solid #ddd}\
td.mod{color:#888;white-space:nowrap}\
a{text-decoration:none;color:#06c}\
img.icon{width:20px;height:20px;vertical-align:middle;margin-right:.4rem}\
.viewer{display:flex;justify-content:center}\
.viewer img{max-width:100%;max-height:90vh}\
.viewer.pano{overflow-x:auto;justify-content:flex-start}\
.viewer.pano img{max-width:none;height:90vh}\
video{width:100%;max-height:90vh;background:#000}\
.crumb{margin-bottom:1rem}\
.content{max-width:50rem;margin:0 auto}";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body { (body) }
        }
    }
}

fn entry_row(entry: &DirEntryView) -> Markup {
    let glyph = if entry.is_dir {
        "\u{1F4C1}"
    } else if entry.is_movie {
        "\u{1F3AC}"
    } else if entry.is_image {
        "\u{1F5BC}"
    } else {
        "\u{1F4C4}"
    };
    html! {
        tr {
            td {
                a href=(PreEscaped(&entry.link)) title=(glyph) {
                    img class="icon" src=(PreEscaped(&entry.icon_link)) alt=(glyph);
                    (entry.name)
                    @if entry.is_dir { "/" }
                }
            }
            td class="mod" {
                @if let Some(modified) = &entry.last_modified { (modified) }
            }
        }
    }
}

pub fn folder_page(view: &FolderView) -> Markup {
    layout(
        &view.title,
        html! {
            div class="crumb" {
                @if let Some(parent) = &view.parent {
                    a href=(PreEscaped(parent)) { "\u{2B06} parent" }
                }
            }
            h1 { (view.title) }
            table {
                @for entry in &view.entries { (entry_row(entry)) }
            }
        },
    )
}

pub fn image_page(view: &ImageView) -> Markup {
    let images_json =
        serde_json::to_string(&view.images).unwrap_or_else(|_| "[]".to_string());
    let base_json =
        serde_json::to_string(&view.base_url).unwrap_or_else(|_| "\"\"".to_string());
    let (viewer_class, step) = match view.variant {
        ImageVariant::Panoramic => ("viewer pano", 1),
        ImageVariant::RightToLeft => ("viewer", -1),
        ImageVariant::Standard => ("viewer", 1),
    };
    let script = format!(
        "var images={images_json};var index={index};var base={base_json};var step={step};\
function show(next){{if(next<0||next>=images.length)return;index=next;\
document.getElementById('img').src=base+images[index];\
history.replaceState(null,'',base+images[index]+'.image.html');}}\
document.addEventListener('keydown',function(e){{\
if(e.key==='ArrowRight')show(index+step);\
if(e.key==='ArrowLeft')show(index-step);}});\
document.getElementById('img').addEventListener('click',function(e){{\
var forward=e.offsetX>this.clientWidth/2;show(index+(forward?step:-step));}});",
        index = view.current_index,
    );
    layout(
        &view.title,
        html! {
            div class="crumb" { a href=(PreEscaped(&view.base_url)) { "\u{2B06} " (view.title) } }
            div class=(viewer_class) {
                img id="img" src=(PreEscaped(format!("{}{}", view.base_url, current_image(view)))) alt=(view.title);
            }
            script { (PreEscaped(script)) }
        },
    )
}

fn current_image(view: &ImageView) -> &str {
    usize::try_from(view.current_index)
        .ok()
        .and_then(|index| view.images.get(index))
        .map(String::as_str)
        .unwrap_or("")
}

pub fn movie_page(view: &MovieView) -> Markup {
    layout(
        &view.title,
        html! {
            div class="crumb" { a href=(PreEscaped(&view.base_url)) { "\u{2B06} " (view.title) } }
            video controls autoplay src=(PreEscaped(&view.stream_link)) {}
        },
    )
}

pub fn markdown_page(view: &MarkdownView) -> Markup {
    layout(
        &view.title,
        html! {
            div class="crumb" { a href=(PreEscaped(&view.base_url)) { "\u{2B06} " (view.title) } }
            div class="content" { (PreEscaped(&view.content_html)) }
        },
    )
}

/// Generic terminal page for every per-request failure. The requested link
/// is echoed; internal paths and error detail never are.
pub fn error_page(status: u16, link: &str) -> Markup {
    let heading = match status {
        403 => "403 Forbidden",
        404 => "404 Not Found",
        _ => "Something went wrong",
    };
    layout(
        heading,
        html! {
            h1 { (heading) }
            p { code { (link) } }
            p { a href="/" { "back to the gallery" } }
        },
    )
}
