use crate::constants::{
    ITEM_CLASS, ITEM_TRANSITION, LINK_TARGET, MEDIA_WRAPPER_CLASS, PORTFOLIO_CONTAINER_SELECTOR,
};
use crate::core::{ItemVisibility, MediaKind, PortfolioItem};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A card element in the page, tagged with its portfolio id.
pub struct PortfolioCard {
    pub id: &'static str,
    pub element: web::HtmlElement,
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

fn create_video(document: &web::Document, src: &str) -> anyhow::Result<web::HtmlElement> {
    let video = create_html(document, "video")?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    video.set_src(src);
    video.set_controls(false);
    video.set_autoplay(true);
    video.set_muted(true);
    video.set_loop(true);
    // autoplay on mobile requires inline playback
    _ = video.set_attribute("playsinline", "");
    Ok(video.unchecked_into())
}

fn create_image(
    document: &web::Document,
    src: &str,
    alt: &str,
) -> anyhow::Result<web::HtmlElement> {
    let img = create_html(document, "img")?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    img.set_alt(alt);
    Ok(img.unchecked_into())
}

fn open_link(link: &str) {
    if let Some(window) = web::window() {
        if let Err(e) = window.open_with_url_and_target(link, LINK_TARGET) {
            log::warn!("[portfolio] could not open {}: {:?}", link, e);
        }
    }
}

pub fn apply_visibility(element: &web::HtmlElement, visibility: ItemVisibility) {
    let style = element.style();
    _ = style.set_property("opacity", &visibility.css_opacity());
    _ = style.set_property("transform", &visibility.css_transform());
}

fn create_card(document: &web::Document, item: &PortfolioItem) -> anyhow::Result<web::HtmlElement> {
    let card = create_html(document, "div")?;
    card.set_class_name(ITEM_CLASS);
    card.set_id(item.id);

    let wrapper = create_html(document, "div")?;
    wrapper.set_class_name(MEDIA_WRAPPER_CLASS);

    let media = match item.media_kind() {
        MediaKind::Video => create_video(document, item.media_path)?,
        MediaKind::Image => create_image(document, item.media_path, item.title)?,
    };
    _ = media.style().set_property("cursor", item.cursor());
    if let Some(link) = item.link.filter(|_| item.is_linked()) {
        dom::add_click_listener(&media, move || open_link(link));
    }
    append(&wrapper, &media)?;
    append(&card, &wrapper)?;

    let heading = create_html(document, "h2")?;
    heading.set_text_content(Some(item.title));
    append(&card, &heading)?;

    _ = card.style().set_property("transition", ITEM_TRANSITION);
    apply_visibility(&card, ItemVisibility::HIDDEN);
    Ok(card)
}

/// Create one card per item inside the portfolio container, in table order.
pub fn build_cards(
    document: &web::Document,
    items: &[PortfolioItem],
) -> anyhow::Result<Vec<PortfolioCard>> {
    let container = document
        .query_selector(PORTFOLIO_CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", PORTFOLIO_CONTAINER_SELECTOR))?;
    let mut cards = Vec::with_capacity(items.len());
    for item in items {
        let element = create_card(document, item)?;
        append(&container, &element)?;
        cards.push(PortfolioCard {
            id: item.id,
            element,
        });
    }
    log::info!("[portfolio] {} cards created", cards.len());
    Ok(cards)
}
