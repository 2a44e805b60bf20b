//! Demo scene content.

use tilekit_layout::{Align, Fill, Layout, Tile};
use tilekit_types::color::{Color, Gradient};

const BAR_HEIGHT: i32 = 32;
const ICON_SIZE: i32 = 64;

/// Fill the background frame with a top bar, a row of icons and a bottom
/// bar of weighted tabs.
pub fn populate(background: &mut Layout) {
    background.set_padding(8);

    let status_bar = Layout::frame()
        .with_tile(|t| {
            t.with_fill(Fill::FillParent, Fill::Absolute)
                .with_height(BAR_HEIGHT)
                .with_align(Align::Top)
                .with_color(Gradient::horizontal(Color::SEABROOK, Color::PICO_VOID))
                .with_depth(10)
        })
        .with_padding(4)
        .with_child(
            Tile::new()
                .with_size(BAR_HEIGHT - 8, BAR_HEIGHT - 8)
                .with_align(Align::Right)
                .with_color(Color::NASTURCIAN_FLOWER)
                .with_depth(11),
        );

    let icons = Layout::horizontal_list()
        .with_tile(|t| t.with_fill(Fill::WrapContent, Fill::WrapContent))
        .with_spacing(16)
        .with_children((0..4).map(|i| {
            Tile::new()
                .with_size(ICON_SIZE, ICON_SIZE)
                .with_color(Color::LYNX_WHITE.darken(i * 20))
                .with_depth(20)
        }));

    let tabs = Layout::horizontal_list()
        .with_tile(|t| {
            t.with_fill(Fill::FillParent, Fill::Absolute)
                .with_height(BAR_HEIGHT)
                .with_align(Align::Bottom)
                .with_depth(10)
        })
        .with_spacing(4)
        .with_children([2, 1, 1].into_iter().map(|weight| {
            Tile::new()
                .with_fill(Fill::FillParent, Fill::FillParent)
                .with_weights(weight, 1)
                .with_color(Gradient::vertical(Color::SKIRRET_GREEN, Color::PICO_VOID))
                .with_depth(11)
        }));

    background.push(status_bar).push(icons).push(tabs);
}
