//! Timeline Example - Order tracking with reactive progress
//!
//! Builds a four-step timeline bound to a progress signal, then advances the
//! signal and switches themes, printing a frame after each change.
//!
//! Run with: RUST_LOG=trace cargo run --example timeline

use std::io::{self, Write};
use std::rc::Rc;

use spark_signals::signal;
use spark_timeline::renderer::detect_terminal_width;
use spark_timeline::{
    create_timeline_derived, create_timeline_frame_derived, set_theme, write_buffer, LineVariant,
    PropValue, TimelineChild, TimelineItemProps, TimelineProps,
};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let progress = signal(0i32);
    let progress_for_content = progress.clone();

    let props = TimelineProps {
        active: Some(PropValue::Signal(progress.clone())),
        color: Some("success".into()),
        ..Default::default()
    };

    let children = vec![
        TimelineChild::item(TimelineItemProps {
            content: Some("We received your order.".into()),
            ..TimelineItemProps::titled("Ordered")
        }),
        TimelineChild::text("(children that are not items are ignored)"),
        TimelineChild::item(TimelineItemProps {
            content: Some(PropValue::Getter(Rc::new(move || {
                if progress_for_content.get() >= 1 {
                    "Packed and handed to the courier.".to_string()
                } else {
                    "Waiting for the warehouse.".to_string()
                }
            }))),
            line_variant: Some(PropValue::Static(LineVariant::Dashed)),
            ..TimelineItemProps::titled("Shipped")
        }),
        TimelineChild::item(TimelineItemProps::titled("Out for delivery")),
        TimelineChild::item(TimelineItemProps {
            bullet: Some(PropValue::Static('★')),
            ..TimelineItemProps::titled("Delivered")
        }),
    ];

    let width = detect_terminal_width().min(60);
    let frame = create_timeline_frame_derived(create_timeline_derived(props, children), width);

    let mut out = io::stdout().lock();

    for step in 0..4 {
        progress.set(step);
        writeln!(out, "--- progress {} ---", step)?;
        write_buffer(&mut out, &frame.get())?;
    }

    for theme in ["dracula", "nord"] {
        set_theme(theme);
        writeln!(out, "--- theme {} ---", theme)?;
        write_buffer(&mut out, &frame.get())?;
    }

    Ok(())
}
