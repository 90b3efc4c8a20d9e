//! Compose a two-page carousel message through the generated factories.
//!
//! Run with `cargo run -p shadow-gen-model --example compose`.

use shadow_gen_model::flex::component::{flex_box, text, video};
use shadow_gen_model::flex::container::{bubble, carousel};
use shadow_gen_model::flex::unit::FlexLayout;

fn main() {
    let intro = video(
        "https://example.com/tour.mp4".to_string(),
        "https://example.com/tour.jpg".to_string(),
        "Take the tour".to_string(),
        |v| {
            v.duration = Some(90);
        },
    );

    let welcome = bubble(|b| {
        b.header = Some(flex_box(
            vec![text(false, |t| {
                t.text = Some("What's new".to_string());
                t.size = Some("sm".to_string());
            })],
            |header| {
                header.layout = Some(FlexLayout::Horizontal);
            },
        ));
        b.body = Some(flex_box(
            vec![
                text(true, |t| {
                    t.text = Some("Welcome!".to_string());
                    t.size = Some("xl".to_string());
                }),
                text(true, |t| {
                    t.text = Some("Swipe to see what's new.".to_string());
                }),
            ],
            |body| {
                body.layout = Some(FlexLayout::Vertical);
                body.spacing = Some("md".to_string());
            },
        ));
    });

    let details = bubble(|b| {
        b.body = Some(flex_box(
            vec![text(false, |t| {
                t.text = Some("Now with video previews.".to_string());
            })],
            |body| {
                body.layout = Some(FlexLayout::Horizontal);
            },
        ));
    });

    let message = carousel(vec![welcome, details], 2, |c| {
        c.name = Some("release-tour".to_string());
    });

    println!("carousel {:?} with {} pages", message.name(), message.count());
    println!("intro video runs {:?} seconds", intro.duration());
}
