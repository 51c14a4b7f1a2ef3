//! askama templates for the portal page fragments.

use askama::Template;

/// One notification node.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div class="notification {{ class }}{% if hiding %} hide{% endif %}" data-id="{{ id }}">
  <div class="notification-icon">{{ icon }}</div>
  <div class="notification-content">
    <div class="notification-title">{{ title }}</div>
    <div class="notification-message">{{ message }}</div>
  </div>
  <button class="notification-close" data-dismiss="{{ id }}">&times;</button>
</div>"#
)]
pub(crate) struct NotificationTemplate<'a> {
    pub id: String,
    pub class: &'a str,
    pub icon: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub hiding: bool,
}

/// The shared container, wrapping already-rendered notification nodes.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div id="{{ element_id }}" class="notification-container">{% for node in nodes %}
{{ node|safe }}{% endfor %}
</div>"#
)]
pub(crate) struct ContainerTemplate<'a> {
    pub element_id: &'a str,
    pub nodes: Vec<String>,
}

/// Countdown and expiry lines of the status page.
#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<div id="countdown" class="countdown {{ class }}">{{ remaining }}</div>{% if !expiry.is_empty() %}
<div id="expiry">{{ expiry }}</div>{% endif %}"#
)]
pub(crate) struct CountdownTemplate<'a> {
    pub class: &'a str,
    pub remaining: &'a str,
    pub expiry: &'a str,
}
