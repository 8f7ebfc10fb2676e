//! River tiles and obstacles for the FuzeCreek game
//!
//! Everything is drawn on a 640 px working square (1280×640 for the raft)
//! and shrunk tenfold.

use tex_gen::{
    chamfered_rect, fill_disc, normalized_polygon, Background, Color, DVec2, Polygon, TextureSpec,
};

const WORKING: u32 = 640;
const OUTPUT: u32 = 64;

const LAND: Color = Color::rgb(0.66, 0.48, 0.35);
const WATER: Color = Color::rgb(0.0, 0.0, 0.73);
const WAKE: Color = Color::rgb(0.24, 0.24, 0.73);

/// Horizontal shift of a river bank where it meets a tile edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    Minus,
    Zero,
    Plus,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Minus, Shift::Zero, Shift::Plus];

    fn label(self) -> &'static str {
        match self {
            Shift::Minus => "Minus",
            Shift::Zero => "Zero",
            Shift::Plus => "Plus",
        }
    }

    fn negate(self) -> Self {
        match self {
            Shift::Minus => Shift::Plus,
            Shift::Zero => Shift::Zero,
            Shift::Plus => Shift::Minus,
        }
    }

    /// Pixel column of the bank line on a tile `size` wide
    fn column(self, size: i32) -> i32 {
        match self {
            Shift::Minus => 0,
            Shift::Zero => size / 2,
            Shift::Plus => size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub fn textures() -> Vec<TextureSpec> {
    let mut specs = Vec::with_capacity(21);
    for upstream in Shift::ALL {
        for downstream in Shift::ALL {
            specs.push(bank(Side::Left, upstream, downstream));
            specs.push(bank(Side::Right, upstream, downstream));
        }
    }
    specs.push(rock());
    specs.push(mine());
    specs.push(raft(2));
    specs
}

/// Bank tile name, e.g. `leftBankMinusZero`
pub fn bank_name(side: Side, upstream: Shift, downstream: Shift) -> String {
    let side = match side {
        Side::Left => "left",
        Side::Right => "right",
    };
    format!("{side}Bank{}{}", upstream.label(), downstream.label())
}

/// Land/water split along a bent line through the tile center
fn bank(side: Side, upstream: Shift, downstream: Shift) -> TextureSpec {
    let (left_color, right_color) = match side {
        Side::Left => (LAND, WATER),
        Side::Right => (WATER, LAND),
    };

    TextureSpec::square(
        bank_name(side, upstream, downstream),
        WORKING,
        OUTPUT,
        Background::Opaque(left_color),
        move |canvas| {
            let size = canvas.width() as i32;
            let center = size / 2;
            let bottom_x = upstream.negate().column(size);
            let top_x = downstream.column(size);
            let right_part = Polygon::from_coords(
                &[size, size, bottom_x, center, top_x],
                &[0, size, size, center, 0],
            )?;
            canvas.fill_polygon(&right_part, right_color);
            Ok(())
        },
    )
}

/// Rock in midstream: wake diamond, land diamond, light and dark facets
fn rock() -> TextureSpec {
    TextureSpec::square("rock", WORKING, OUTPUT, Background::Opaque(WATER), |canvas| {
        let size = canvas.width() as i32;
        let center = size / 2;

        let p1 = size / 5;
        let p2 = size - p1;
        let wake = Polygon::from_coords(&[center, p1, center, p2], &[0, center, p2, center])?;
        canvas.fill_polygon(&wake, WAKE);

        let low = size / 4;
        let high = size - low;
        let body = Polygon::from_coords(&[center, high, center, low], &[high, center, low, center])?;
        canvas.fill_polygon(&body, LAND);

        let lit = Polygon::from_coords(&[center, center, high], &[center, high, center])?;
        canvas.fill_polygon(&lit, Color::WHITE);

        let shade = Polygon::from_coords(&[center, center, low], &[center, low, center])?;
        canvas.fill_polygon(&shade, Color::rgb(0.33, 0.24, 0.17));
        Ok(())
    })
}

/// Floating mine with a wake and four horns
fn mine() -> TextureSpec {
    TextureSpec::square("mine", WORKING, OUTPUT, Background::Opaque(WATER), |canvas| {
        let extent = canvas.extent();
        let center = DVec2::new(0.5, 0.6);

        fill_disc(canvas, center, 0.35, WAKE)?;
        let half_base = 0.312;
        let wake = normalized_polygon(
            &[
                DVec2::new(center.x, 0.0),
                DVec2::new(center.x + half_base, center.y - 0.16),
                DVec2::new(center.x - half_base, center.y - 0.16),
            ],
            extent,
        )?;
        canvas.fill_polygon(&wake, WAKE);

        let red = Color::rgb(0.73, 0.0, 0.0);
        fill_disc(canvas, center, 0.3, red)?;

        // Two crossed bars, each ending in a horn on both sides
        let (horn_r, half_angle) = (0.45, 0.1);
        let near = horn_r * (std::f64::consts::FRAC_PI_4 - half_angle).sin();
        let far = horn_r * (std::f64::consts::FRAC_PI_4 + half_angle).sin();
        for flip in [1.0, -1.0] {
            let horns = normalized_polygon(
                &[
                    center + DVec2::new(-near, -far * flip),
                    center + DVec2::new(-far, -near * flip),
                    center + DVec2::new(near, far * flip),
                    center + DVec2::new(far, near * flip),
                ],
                extent,
            )?;
            canvas.fill_polygon(&horns, red);
        }
        Ok(())
    })
}

/// Raft spanning `cells` river cells: green float ring around a gray floor
fn raft(cells: u32) -> TextureSpec {
    TextureSpec::new(
        format!("raft{cells}"),
        (cells * WORKING, WORKING),
        (cells * OUTPUT, OUTPUT),
        Background::Opaque(WATER),
        |canvas| {
            let (w, h) = (canvas.width() as f64, canvas.height() as f64);
            canvas.fill_polygon(&chamfered_rect(0.0, 0.0, w, h)?, Color::rgb(0.0, 0.5, 0.0));

            let inset = (0.3 * h).round();
            let floor = chamfered_rect(inset, inset, w - inset, h - inset)?;
            canvas.fill_polygon(&floor, Color::gray(0.2, 1.0));
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tex_gen::ResampleFilter;

    fn find(name: &str) -> TextureSpec {
        textures().into_iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_bank_names() {
        assert_eq!(bank_name(Side::Left, Shift::Minus, Shift::Zero), "leftBankMinusZero");
        assert_eq!(bank_name(Side::Right, Shift::Plus, Shift::Plus), "rightBankPlusPlus");
        assert_eq!(textures().len(), 21);
    }

    #[test]
    fn test_straight_banks_split_at_center() {
        let land = LAND.to_rgba8();
        let water = WATER.to_rgba8();

        let left = find("leftBankZeroZero").render().unwrap();
        assert_eq!(left.get_pixel(10, 320), land);
        assert_eq!(left.get_pixel(319, 320), land);
        assert_eq!(left.get_pixel(320, 320), water);
        assert_eq!(left.get_pixel(630, 600), water);

        let right = find("rightBankZeroZero").render().unwrap();
        assert_eq!(right.get_pixel(10, 320), water);
        assert_eq!(right.get_pixel(630, 600), land);
    }

    #[test]
    fn test_bent_bank_reaches_tile_edges() {
        // Downstream (top) edge shifted fully right: the top row is land
        let tile = find("leftBankZeroPlus").render().unwrap();
        assert_eq!(tile.get_pixel(600, 0), LAND.to_rgba8());
        // Upstream (bottom) edge unshifted: water starts at the middle
        assert_eq!(tile.get_pixel(600, 639), WATER.to_rgba8());
        assert_eq!(tile.get_pixel(100, 639), LAND.to_rgba8());
    }

    #[test]
    fn test_rock_layers() {
        let rock = find("rock").render().unwrap();
        assert_eq!(rock.get_pixel(5, 5), WATER.to_rgba8());
        assert_eq!(rock.get_pixel(320, 20), WAKE.to_rgba8());
        // Light facet lower right of the center, dark facet upper left
        assert_eq!(rock.get_pixel(340, 340), [255, 255, 255, 255]);
        assert_eq!(rock.get_pixel(300, 300), Color::rgb(0.33, 0.24, 0.17).to_rgba8());
    }

    #[test]
    fn test_mine_body_and_horns() {
        let mine = find("mine").render().unwrap();
        let red = Color::rgb(0.73, 0.0, 0.0).to_rgba8();
        assert_eq!(mine.get_pixel(320, 384), red);
        // Horn tip beyond the body radius, along the lower-right diagonal
        assert_eq!(mine.get_pixel(320 + 190, 384 + 190), red);
        assert_eq!(mine.get_pixel(320, 10), WAKE.to_rgba8());
        assert_eq!(mine.get_pixel(5, 5), WATER.to_rgba8());
    }

    #[test]
    fn test_raft_size_and_floor() {
        let raft = find("raft2");
        assert_eq!(raft.file_name, "raft2.png");
        assert_eq!(raft.working, (1280, 640));

        let out = raft.build(ResampleFilter::Area).unwrap();
        assert_eq!((out.width(), out.height()), (128, 64));
        assert_eq!(out.get_pixel(64, 32), Color::gray(0.2, 1.0).to_rgba8());
        assert_eq!(out.get_pixel(64, 2), Color::rgb(0.0, 0.5, 0.0).to_rgba8());
        // Chamfered corner leaves water showing
        assert_eq!(out.get_pixel(0, 0), WATER.to_rgba8());
    }
}
