use crate::core::constants::API_NAMESPACE;
use crate::events::{Event, ListenerKind};
use crate::rendering::{script, RenderContext};

/// `var <e> = google.maps.event.<fn>(<instance>, "<name>", <handle>[, <capture>]);`
pub fn render_event(context: &mut RenderContext, kind: ListenerKind, event: &Event) {
    let mut arguments = vec![
        event.instance.clone(),
        script::string(&event.event_name),
        event.handle.clone(),
    ];
    if kind.is_dom() {
        arguments.push(event.capture.to_string());
    }

    context.declare(
        event.javascript_variable(),
        format!(
            "{}.event.{}({})",
            API_NAMESPACE,
            kind.function(),
            arguments.join(", ")
        ),
    );
}
