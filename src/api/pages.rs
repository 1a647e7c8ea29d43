//! HTML pages for the upload, view and error responses.

use maud::{html, Markup, DOCTYPE};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                (body)
            }
        }
    }
}

pub fn upload_page() -> Markup {
    layout(
        "Upload an image",
        html! {
            h1 { "Upload an image" }
            form method="post" action="/" enctype="multipart/form-data" {
                p {
                    label for="image" { "Image: " }
                    input type="file" name="image" id="image";
                }
                p {
                    label for="message" { "Message: " }
                    input type="text" name="message" id="message";
                }
                p {
                    input type="submit" value="Upload";
                }
            }
        },
    )
}

pub fn view_page(key: &str) -> Markup {
    layout(
        "View image",
        html! {
            h1 { "Your image" }
            p {
                img src={ "/img?id=" (key) } alt="uploaded image";
            }
            p {
                a href="/" { "Upload another" }
            }
        },
    )
}

pub fn error_page(message: &str) -> Markup {
    layout(
        "Something went wrong",
        html! {
            h1 { "Something went wrong" }
            p { (message) }
            p {
                a href="/" { "Back to upload" }
            }
        },
    )
}
