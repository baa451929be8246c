//! Landing page components.
//!
//! Each component appends its nodes under a parent and returns handles to the nodes callers
//! animate or update later.

use crate::animation::value::{Property, PropValue, Visibility};
use crate::config::FeatureCard;
use crate::foundation::core::{Length, NodeId, Rect, REM_PX};
use crate::foundation::error::HeroResult;
use crate::view::scene::{MediaState, Node, Scene};

/// Small inline icon glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Tilted location arrow.
    LocationArrow,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Self::LocationArrow => "M19.6 4.4 3.7 11.1l7 2.2 2.2 7z",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::LocationArrow => "location-arrow",
        }
    }
}

fn icon(scene: &mut Scene, parent: NodeId, icon: Icon) -> HeroResult<NodeId> {
    let svg = scene.append(
        Some(parent),
        Node::new("svg")
            .class("icon")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "currentColor")
            .attr("data-icon", icon.name()),
    )?;
    scene.append(Some(svg), Node::new("path").attr("d", icon.path()))?;
    Ok(svg)
}

/// Button properties.
#[derive(Clone, Debug, Default)]
pub struct ButtonProps<'a> {
    /// DOM id.
    pub id: &'a str,
    /// Label text.
    pub title: &'a str,
    /// Classes appended to the base button classes.
    pub container_class: &'a str,
    /// Glyph before the label.
    pub left_icon: Option<Icon>,
    /// Glyph after the label.
    pub right_icon: Option<Icon>,
}

/// Pill button with optional icons.
pub fn button(scene: &mut Scene, parent: NodeId, props: &ButtonProps<'_>) -> HeroResult<NodeId> {
    let class = format!(
        "group relative z-10 w-fit cursor-pointer overflow-hidden rounded-full bg-violet-50 px-7 py-3 text-black {}",
        props.container_class
    );
    let btn = scene.append(
        Some(parent),
        Node::new("button").id(props.id).class(class.trim_end()),
    )?;
    if let Some(left) = props.left_icon {
        icon(scene, btn, left)?;
    }
    let label = scene.append(
        Some(btn),
        Node::new("span")
            .class("relative incline-flex overflow-hidden font-general text-xs uppercase"),
    )?;
    scene.append(Some(label), Node::new("div").text(props.title))?;
    if let Some(right) = props.right_icon {
        icon(scene, btn, right)?;
    }
    Ok(btn)
}

/// Card with a looping background video, a markup title and an optional description.
pub fn bento_card(scene: &mut Scene, parent: NodeId, card: &FeatureCard) -> HeroResult<NodeId> {
    let root = scene.append(Some(parent), Node::new("div").class("relative size-full"))?;
    scene.append(
        Some(root),
        Node::new("video")
            .class("absolute left-0 top-0 size-full object-cover object-center")
            .media(MediaState::looping(&card.src).autoplay()),
    )?;
    let body = scene.append(
        Some(root),
        Node::new("div")
            .class("relative z-10 flex size-full flex-col justify-between p-5 text-blue-50"),
    )?;
    let text = scene.append(Some(body), Node::new("div"))?;
    scene.append(
        Some(text),
        Node::new("h1")
            .class("bento-title special-font")
            .markup(&card.title),
    )?;
    if let Some(description) = &card.description {
        scene.append(
            Some(text),
            Node::new("p")
                .class("mt-3 max-w-64 text-xs md:text-base")
                .text(description),
        )?;
    }
    Ok(root)
}

/// Feature grid: the first card spans the full width, the rest tile below it.
pub fn features(scene: &mut Scene, parent: NodeId, cards: &[FeatureCard]) -> HeroResult<NodeId> {
    let section = scene.append(
        Some(parent),
        Node::new("section").id("features").class("bg-black pb-52"),
    )?;
    let container = scene.append(
        Some(section),
        Node::new("div").class("container mx-auto px-3 md:px-10"),
    )?;
    let Some((first, rest)) = cards.split_first() else {
        return Ok(section);
    };

    let hero_card = scene.append(
        Some(container),
        Node::new("div")
            .class("border-hsla relative mb-7 h-96 w-full overflow-hidden rounded-md md:h-[65vh]"),
    )?;
    bento_card(scene, hero_card, first)?;

    let grid = scene.append(
        Some(container),
        Node::new("div").class("grid h-[135vh] w-full grid-cols-2 grid-rows-3 gap-7"),
    )?;
    for card in rest {
        let cell = scene.append(Some(grid), Node::new("div").class("bento-tilt_1"))?;
        bento_card(scene, cell, card)?;
    }
    Ok(section)
}

/// Image wrapped in a clip-shaped box. The clip shape comes from `clip_class`.
pub fn image_clip_box(
    scene: &mut Scene,
    parent: NodeId,
    src: &str,
    clip_class: &str,
) -> HeroResult<NodeId> {
    let boxed = scene.append(Some(parent), Node::new("div").class(clip_class))?;
    scene.append(Some(boxed), Node::new("img").attr("src", src))?;
    Ok(boxed)
}

/// Contact call-to-action with decorative clipped images.
pub fn contact(scene: &mut Scene, parent: NodeId) -> HeroResult<NodeId> {
    let root = scene.append(
        Some(parent),
        Node::new("div")
            .id("contact")
            .class("my-20 min-h-96 w-screen px-10"),
    )?;
    let panel = scene.append(
        Some(root),
        Node::new("div")
            .class("relative rounded-lg bg-black py-24 text-blue-50 sm:overflow-hidden"),
    )?;

    let left = scene.append(
        Some(panel),
        Node::new("div").class(
            "absolute -left-20 top-0 hidden h-full w-72 overflow-hidden sm:block lg:left-20 lg:w-96",
        ),
    )?;
    image_clip_box(scene, left, "img/contact-1.webp", "contact-clip-path-1")?;
    image_clip_box(
        scene,
        left,
        "img/contact-2.webp",
        "contact-clip-path-2 lg:translate-y-40 translate-y-60",
    )?;

    let right = scene.append(
        Some(panel),
        Node::new("div").class(
            "absolute -top-40 left-20 w-60 sm:top-1/2 md:left-auto md:right-10 lg:top-20 lg:w-80",
        ),
    )?;
    image_clip_box(scene, right, "img/swordman-partial.webp", "absolute md:scale-125")?;
    image_clip_box(
        scene,
        right,
        "img/swordman.webp",
        "sword-man-clip-path md:scale-125",
    )?;

    let copy = scene.append(
        Some(panel),
        Node::new("div").class("flex flex-col items-center text-center"),
    )?;
    scene.append(
        Some(copy),
        Node::new("p")
            .class("font-general text-[10px] uppercase")
            .text("Join Zentry"),
    )?;
    scene.append(
        Some(copy),
        Node::new("p")
            .class("special-font z-10 mt-10 w-full font-zentry text-5xl leading-[0.9] md:text-[6rem]")
            .markup("Let's b<b>u</b>ild the <br> n<b>e</b>w era of <br> g<b>a</b>ming t<b>o</b>gether"),
    )?;
    button(
        scene,
        copy,
        &ButtonProps {
            id: "contact-button",
            title: "contact us",
            container_class: "mt-10 cursor-pointer hover:bg-violet-300 transition-all duration-300",
            ..ButtonProps::default()
        },
    )?;
    Ok(root)
}

/// Inputs for [`hero`].
#[derive(Clone, Debug)]
pub struct HeroProps<'a> {
    /// Source of the growing layer (current index).
    pub current_src: String,
    /// Source of the click preview (upcoming index).
    pub upcoming_src: String,
    /// Source of the full-frame background.
    pub background_src: String,
    /// Heading markup for the current index.
    pub heading: &'a str,
}

/// Handles to the hero nodes the controller drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroNodes {
    /// Outer section.
    pub section: NodeId,
    /// Loading overlay, detached once videos are ready.
    pub loading_overlay: NodeId,
    /// Clipped frame holding the videos (`video-frame`).
    pub video_frame: NodeId,
    /// Clickable wrapper around the preview.
    pub preview_trigger: NodeId,
    /// Small preview of the upcoming video (`current-video`).
    pub current_video: NodeId,
    /// Layer that grows to full frame on click (`next-video`).
    pub next_video: NodeId,
    /// Full-frame autoplaying background.
    pub background_video: NodeId,
    /// Animated heading inside the frame (`current-text`).
    pub current_text: NodeId,
    /// Static heading behind the frame.
    pub backdrop_heading: NodeId,
    /// Trailer button.
    pub watch_trailer: NodeId,
}

/// Number of hero video elements that report load events.
pub const GATED_VIDEO_COUNT: usize = 3;

impl HeroNodes {
    /// Video nodes whose load events feed the load gate.
    pub fn gated_videos(&self) -> [NodeId; GATED_VIDEO_COUNT] {
        [self.current_video, self.next_video, self.background_video]
    }
}

const PREVIEW_SIZE_PX: f64 = 16.0 * REM_PX;

/// Hero section: loading overlay, video frame with preview, growing layer and background,
/// animated heading and intro copy.
pub fn hero(scene: &mut Scene, parent: NodeId, props: &HeroProps<'_>) -> HeroResult<HeroNodes> {
    let viewport = scene.viewport();
    let section = scene.append(
        Some(parent),
        Node::new("section")
            .id("hero")
            .class("relative h-dvh w-screen overflow-x-hidden"),
    )?;

    let loading_overlay = scene.append(
        Some(section),
        Node::new("div").class(
            "flex-center absolute z-[100] h-dvh w-screen overflow-hidden bg-violet-50",
        ),
    )?;
    let spinner = scene.append(Some(loading_overlay), Node::new("div").class("three-body"))?;
    for _ in 0..3 {
        scene.append(Some(spinner), Node::new("div").class("three-body__dot"))?;
    }

    let video_frame = scene.append(
        Some(section),
        Node::new("div")
            .id("video-frame")
            .class("relative z-10 h-dvh w-screen overflow-hidden rounded-lg bg-blue-75")
            .bounds(Rect::new(0.0, 0.0, viewport.width, viewport.height)),
    )?;
    let stack = scene.append(Some(video_frame), Node::new("div"))?;

    let mask = scene.append(
        Some(stack),
        Node::new("div").class(
            "mask-clip-path absolute-center absolute z-50 size-64 cursor-pointer overflow-hidden rounded-lg",
        ),
    )?;
    let preview_trigger = scene.append(
        Some(mask),
        Node::new("div")
            .class("origin-center scale-50 opacity-0 transition-all duration-500 ease-in hover:scale-100 hover:opacity-100")
            .attr("data-action", "advance"),
    )?;
    let current_video = scene.append(
        Some(preview_trigger),
        Node::new("video")
            .id("current-video")
            .class("size-64 origin-center scale-150 object-cover object-center")
            .media(MediaState::looping(&props.upcoming_src))
            .intrinsic(Property::Scale, 1.5)
            .intrinsic(
                Property::TransformOrigin,
                PropValue::Keyword("center center".to_owned()),
            ),
    )?;

    let next_video = scene.append(
        Some(stack),
        Node::new("video")
            .id("next-video")
            .class("absolute-center invisible absolute z-20 size-64 object-center object-cover")
            .media(MediaState::looping(&props.current_src))
            .intrinsic(Property::Visibility, Visibility::Hidden)
            .intrinsic(Property::Width, Length::Px(PREVIEW_SIZE_PX))
            .intrinsic(Property::Height, Length::Px(PREVIEW_SIZE_PX)),
    )?;

    let background_video = scene.append(
        Some(stack),
        Node::new("video")
            .class("absolute left-0 top-0 size-full object-cover object-center")
            .media(MediaState::looping(&props.background_src).autoplay()),
    )?;

    let current_text = scene.append(
        Some(video_frame),
        Node::new("h1")
            .id("current-text")
            .class("special-font hero-heading absolute bottom-5 right-5 z-40 text-blue-75")
            .markup(props.heading),
    )?;

    let copy = scene.append(
        Some(video_frame),
        Node::new("div").class("absolute left-0 top-0 z-40 size-full"),
    )?;
    let copy_inner = scene.append(Some(copy), Node::new("div").class("mt-24 px-5 sm:px-10"))?;
    scene.append(
        Some(copy_inner),
        Node::new("h1")
            .class("special-font hero-heading text-blue-100")
            .markup("redefi<b>n</b>e"),
    )?;
    scene.append(
        Some(copy_inner),
        Node::new("p")
            .class("mb-5 max-w-64 font-robert-regular text-blue-100")
            .markup("Enter the Metagame Layer <br> Unleash the Play Economy."),
    )?;
    let watch_trailer = button(
        scene,
        copy_inner,
        &ButtonProps {
            id: "watch-trailer",
            title: "Watch Trailer",
            container_class: "!bg-yellow-300 flex-center gap-1 transition-all duration-500 hover:gap-3",
            left_icon: Some(Icon::LocationArrow),
            right_icon: None,
        },
    )?;

    let backdrop_heading = scene.append(
        Some(section),
        Node::new("h1")
            .class("special-font hero-heading absolute bottom-5 right-5 text-black")
            .markup(props.heading),
    )?;

    Ok(HeroNodes {
        section,
        loading_overlay,
        video_frame,
        preview_trigger,
        current_video,
        next_video,
        background_video,
        current_text,
        backdrop_heading,
        watch_trailer,
    })
}

/// Handles to the landing page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingNodes {
    /// Page root.
    pub main: NodeId,
    /// Hero section handles.
    pub hero: HeroNodes,
    /// Feature grid section.
    pub features: NodeId,
    /// Contact section.
    pub contact: NodeId,
}

/// Full page: hero, feature grid and contact section under a new root.
pub fn landing_page(
    scene: &mut Scene,
    hero_props: &HeroProps<'_>,
    cards: &[FeatureCard],
) -> HeroResult<LandingNodes> {
    let main = scene.append(
        None,
        Node::new("main").class("relative min-h-screen w-screen overflow-x-hidden"),
    )?;
    let hero = hero(scene, main, hero_props)?;
    let features = features(scene, main, cards)?;
    let contact = contact(scene, main)?;
    Ok(LandingNodes {
        main,
        hero,
        features,
        contact,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/view/components.rs"]
mod tests;
