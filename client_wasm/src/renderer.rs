//! 2D canvas implementation of the core's render target

use game_core::{Aabb, Color, GameError, RenderTarget, Sprite, Tint};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

const BANNER_FONT: &str = "40px Arial";

/// Sprite images, loaded once at startup
///
/// Drawing an image that has not finished loading draws nothing, so there is
/// no explicit load handling.
pub struct Sprites {
    character: HtmlImageElement,
    floor: HtmlImageElement,
    projectile: HtmlImageElement,
}

impl Sprites {
    pub fn load() -> Result<Self, JsValue> {
        Ok(Self {
            character: load_image("character.png")?,
            floor: load_image("floor.png")?,
            projectile: load_image("projectile.png")?,
        })
    }

    fn get(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Character => &self.character,
            Sprite::Floor => &self.floor,
            Sprite::Projectile => &self.projectile,
        }
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    Ok(image)
}

pub struct CanvasTarget {
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
    width: f64,
    height: f64,
}

impl CanvasTarget {
    pub fn new(canvas: &HtmlCanvasElement, sprites: Sprites) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            sprites,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

fn render_error(err: JsValue) -> GameError {
    GameError::Render(format!("{:?}", err))
}

impl RenderTarget for CanvasTarget {
    fn clear(&mut self) -> Result<(), GameError> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, bounds: Aabb, tint: Tint) -> Result<(), GameError> {
        let size = bounds.size();
        let image = self.sprites.get(sprite);
        if tint == Tint::Inverted {
            self.ctx.save();
            self.ctx.set_filter("invert(100%)");
        }
        let drawn = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            bounds.min.x as f64,
            bounds.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
        if tint == Tint::Inverted {
            self.ctx.restore();
        }
        drawn.map_err(render_error)
    }

    fn fill_rect(&mut self, bounds: Aabb, color: Color) -> Result<(), GameError> {
        let size = bounds.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            bounds.min.x as f64,
            bounds.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
        Ok(())
    }

    fn fill_text_centered(&mut self, text: &str, center: Vec2) -> Result<(), GameError> {
        self.ctx.set_fill_style_str(&Color::BLACK.to_css());
        self.ctx.set_font(BANNER_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(text, center.x as f64, center.y as f64)
            .map_err(render_error)
    }
}
