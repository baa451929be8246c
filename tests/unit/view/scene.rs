use super::*;
use crate::animation::value::Visibility;
use crate::foundation::core::Length;

fn scene() -> Scene {
    Scene::new(Size::new(1280.0, 800.0))
}

#[test]
fn append_builds_parent_links() {
    let mut s = scene();
    let root = s.append(None, Node::new("main")).unwrap();
    let child = s.append(Some(root), Node::new("div").id("a")).unwrap();
    assert_eq!(s.get(root).unwrap().children(), &[child]);
    assert_eq!(s.find_by_dom_id("a"), Some(child));
    assert!(s.is_mounted(child));
    assert!(s.append(None, Node::new("main")).is_err());
}

#[test]
fn computed_falls_back_through_intrinsic_and_initial() {
    let mut s = scene();
    let root = s.append(None, Node::new("main")).unwrap();
    let v = s
        .append(
            Some(root),
            Node::new("video").intrinsic(Property::Width, Length::Px(256.0)),
        )
        .unwrap();

    assert_eq!(
        s.computed(v, Property::Width).unwrap(),
        Some(PropValue::Length(Length::Px(256.0)))
    );
    assert_eq!(
        s.computed(v, Property::Opacity).unwrap(),
        Some(PropValue::Number(1.0))
    );

    s.set_inline(v, Property::Width, PropValue::Length(Length::Percent(100.0)))
        .unwrap();
    assert_eq!(
        s.computed(v, Property::Width).unwrap(),
        Some(PropValue::Length(Length::Percent(100.0)))
    );

    s.restore_inline(v, Property::Width, None).unwrap();
    assert_eq!(s.inline(v, Property::Width).unwrap(), None);
}

#[test]
fn detached_nodes_stop_rendering() {
    let mut s = scene();
    let root = s.append(None, Node::new("section")).unwrap();
    let overlay = s
        .append(Some(root), Node::new("div").class("overlay"))
        .unwrap();
    assert!(s.to_html().contains("overlay"));

    s.detach(overlay).unwrap();
    s.detach(overlay).unwrap();
    assert!(!s.is_mounted(overlay));
    assert_eq!(s.to_html(), "<section></section>");
}

#[test]
fn html_escapes_text_but_not_markup() {
    let mut s = scene();
    let root = s.append(None, Node::new("div")).unwrap();
    s.append(Some(root), Node::new("p").text("a < b")).unwrap();
    s.append(Some(root), Node::new("h1").markup("G<b>a</b>ming"))
        .unwrap();
    assert_eq!(
        s.to_html(),
        "<div><p>a &lt; b</p><h1>G<b>a</b>ming</h1></div>"
    );
}

#[test]
fn inner_html_style_overrides_content() {
    let mut s = scene();
    let h = s.append(None, Node::new("h1").markup("old")).unwrap();
    s.set_inline(h, Property::InnerHtml, PropValue::Markup("new".into()))
        .unwrap();
    s.set_inline(h, Property::Opacity, PropValue::Number(0.0))
        .unwrap();
    assert_eq!(s.to_html(), "<h1 style=\"opacity: 0;\">new</h1>");
}

#[test]
fn media_attributes_render() {
    let mut s = scene();
    let v = s
        .append(
            None,
            Node::new("video")
                .id("next-video")
                .media(MediaState::looping("videos/hero-1.mp4")),
        )
        .unwrap();
    s.set_inline(v, Property::Visibility, PropValue::Visibility(Visibility::Visible))
        .unwrap();
    s.media_mut(v).unwrap().playing = true;
    assert_eq!(
        s.to_html(),
        "<video id=\"next-video\" src=\"videos/hero-1.mp4\" loop muted data-playing=\"true\" \
         style=\"visibility: visible;\"></video>"
    );
}

#[test]
fn void_elements_have_no_closing_tag() {
    let mut s = scene();
    s.append(None, Node::new("img").attr("src", "img/contact-1.webp"))
        .unwrap();
    assert_eq!(s.to_html(), "<img src=\"img/contact-1.webp\">");
}

#[test]
fn unknown_handles_error() {
    let s = scene();
    assert!(s.get(NodeId(9)).is_err());
    assert!(s.render(NodeId(9)).is_err());
}
