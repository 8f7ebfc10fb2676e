//! Dials, buttons and HUD sprites
//!
//! Most icons share a layout: an opaque square in the foreground color with
//! a dark disc (radius 0.44) on top, and the glyph drawn over the disc.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use tex_gen::{
    fill_annulus_sector, fill_disc, fill_full_annulus, fill_rect_norm, normalized_polygon,
    radial_falloff, to_pixel, AlphaRamp, Background, Canvas, Color, Cross, DVec2, HalfDisc,
    HornBell, HornCoil, RadialPolygon, Result, Speaker, TextureSpec, CENTER,
};

/// Working size of the square GUI textures
const WORKING: u32 = 2048;
/// Final size of the round buttons
const BUTTON: u32 = 128;
/// Radius of the disc behind each button glyph
const BUTTON_RADIUS: f64 = 0.44;

const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const GREEN: Color = Color::rgb(0.0, 0.7, 0.0);

pub fn textures() -> Vec<TextureSpec> {
    vec![
        dial("speedo_bg_2", Color::BLACK),
        dial("tachometer_bg", Color::rgb(0.7, 0.0, 0.0)),
        horn("horn-silent", Color::BLACK),
        horn("horn-sound", Color::rgb(0.5, 0.0, 0.0)),
        mute(),
        sound(),
        power("power-off", Color::rgb(0.3, 0.0, 0.0)),
        power("power-on", GREEN),
        pause(),
        run(),
        single_step(),
        left_triangle(),
        steering(),
        loading(),
        powered_by(),
        compass(),
        needle(),
        smoke(),
        skidmark(),
    ]
}

fn fill_polygon_norm(canvas: &mut Canvas, points: &[DVec2], color: Color) -> Result<()> {
    let polygon = normalized_polygon(points, canvas.extent())?;
    canvas.fill_polygon(&polygon, color);
    Ok(())
}

/// Round button: `fg` everywhere, a `bg` disc on top, then `glyph` in `fg`
fn button(
    name: &'static str,
    fg: Color,
    bg: Color,
    glyph: impl Fn(&mut Canvas, Color, Color) -> Result<()> + Send + Sync + 'static,
) -> TextureSpec {
    TextureSpec::square(name, WORKING, BUTTON, Background::Opaque(fg), move |canvas| {
        fill_disc(canvas, CENTER, BUTTON_RADIUS, bg)?;
        glyph(canvas, fg, bg)
    })
}

/// Gauge face: thin cyan rim, black band, colored red zone
fn dial(name: &'static str, redzone: Color) -> TextureSpec {
    TextureSpec::square(name, WORKING, 201, Background::Transparent, move |canvas| {
        fill_full_annulus(canvas, 0.48, 0.495, Color::rgb(0.0, 0.3, 0.3))?;
        fill_full_annulus(canvas, 0.3, 0.482, Color::BLACK)?;
        fill_annulus_sector(canvas, 0.44, 0.482, FRAC_PI_2 - 1.0, FRAC_PI_2, redzone)
    })
}

/// Horn button: bore, bell, coil and mouthpiece on a white square
fn horn(name: &'static str, bg: Color) -> TextureSpec {
    let fg = Color::rgb(0.7, 0.7, 0.0);
    TextureSpec::square(name, WORKING, BUTTON, Background::Opaque(Color::WHITE), move |canvas| {
        fill_disc(canvas, CENTER, BUTTON_RADIUS, bg)?;

        let bell = HornBell::default();
        let mouthpiece = DVec2::new(0.88, 0.44);
        fill_rect_norm(
            canvas,
            DVec2::new(bell.lower_center.x, bell.upper_center.y + bell.radius),
            DVec2::new(mouthpiece.x, bell.lower_center.y - bell.radius),
            fg,
        );

        let extent = canvas.extent();
        canvas.fill_polygon(&bell.polygon(extent)?, fg);
        canvas.fill_polygon(&HornCoil::default().polygon(extent)?, fg);
        let cup = HalfDisc {
            center: mouthpiece,
            radius: 0.05,
            samples: 13,
        };
        canvas.fill_polygon(&cup.polygon(extent)?, fg);
        Ok(())
    })
}

fn mute() -> TextureSpec {
    button("mute", YELLOW, Color::BLACK, |canvas, fg, _| {
        let extent = canvas.extent();
        canvas.fill_polygon(&Speaker::default().polygon(extent)?, fg);
        let cross = Cross {
            center: DVec2::new(0.7, 0.5),
            arm: 0.12,
            thickness: 0.02,
        };
        canvas.fill_polygon(&cross.polygon(extent)?, fg);
        Ok(())
    })
}

fn sound() -> TextureSpec {
    button("sound", GREEN, Color::BLACK, |canvas, fg, _| {
        canvas.fill_polygon(&Speaker::default().polygon(canvas.extent())?, fg);
        let thickness = 0.04;
        for radius in [0.17, 0.27] {
            fill_annulus_sector(
                canvas,
                radius,
                radius + thickness,
                FRAC_PI_4,
                3.0 * FRAC_PI_4,
                fg,
            )?;
        }
        Ok(())
    })
}

/// Power symbol: broken ring with a vertical bar through the gap
fn power(name: &'static str, bg: Color) -> TextureSpec {
    button(name, Color::WHITE, bg, |canvas, fg, bg| {
        let (radius, line) = (0.25, 0.04);
        fill_disc(canvas, CENTER, radius, fg)?;
        fill_disc(canvas, CENTER, radius - line, bg)?;

        let gap = 0.08;
        fill_rect_norm(canvas, DVec2::new(0.5 - gap, 0.1), DVec2::new(0.5 + gap, 0.5), bg);
        let half = line / 2.0;
        fill_rect_norm(canvas, DVec2::new(0.5 - half, 0.13), DVec2::new(0.5 + half, 0.47), fg);
        Ok(())
    })
}

fn pause() -> TextureSpec {
    button("pause", YELLOW, Color::BLACK, |canvas, fg, _| {
        let (h, w) = (0.4, 0.1);
        let (top, bottom) = (0.5 - 0.5 * h, 0.5 + 0.5 * h);
        fill_rect_norm(canvas, DVec2::new(0.5 - 1.5 * w, top), DVec2::new(0.5 - 0.5 * w, bottom), fg);
        fill_rect_norm(canvas, DVec2::new(0.5 + 0.5 * w, top), DVec2::new(0.5 + 1.5 * w, bottom), fg);
        Ok(())
    })
}

/// Right-pointing play triangle with its apex at `x + 0.7 * width`
fn play_triangle(x: f64, width: f64, height: f64) -> [DVec2; 3] {
    [
        DVec2::new(x - 0.3 * width, 0.5 - 0.5 * height),
        DVec2::new(x - 0.3 * width, 0.5 + 0.5 * height),
        DVec2::new(x + 0.7 * width, 0.5),
    ]
}

fn run() -> TextureSpec {
    button("run", GREEN, Color::BLACK, |canvas, fg, _| {
        fill_polygon_norm(canvas, &play_triangle(0.5, 0.4, 0.6), fg)
    })
}

fn single_step() -> TextureSpec {
    button("single-step", Color::WHITE, Color::BLACK, |canvas, fg, _| {
        let (h, w) = (0.6, 0.1);
        fill_rect_norm(
            canvas,
            DVec2::new(0.5 - 1.5 * w, 0.5 - 0.5 * h),
            DVec2::new(0.5 - 0.5 * w, 0.5 + 0.5 * h),
            fg,
        );
        fill_polygon_norm(canvas, &play_triangle(0.6, 0.3, 0.6), fg)
    })
}

fn left_triangle() -> TextureSpec {
    let fg = Color::gray(0.3, 1.0);
    TextureSpec::square(
        "left-triangle",
        WORKING,
        BUTTON,
        Background::Opaque(Color::BLACK),
        move |canvas| {
            let (h, w) = (0.8, 0.9);
            let points = [
                DVec2::new(0.5 + 0.5 * w, 0.5 - 0.5 * h),
                DVec2::new(0.5 + 0.5 * w, 0.5 + 0.5 * h),
                DVec2::new(0.5 - 0.5 * w, 0.5),
            ];
            fill_polygon_norm(canvas, &points, fg)
        },
    )
}

/// Steering wheel: rim plus a bent hexagonal spoke
fn steering() -> TextureSpec {
    TextureSpec::square("steering", WORKING, 256, Background::Transparent, |canvas| {
        fill_full_annulus(canvas, 0.43, 0.5, Color::BLACK)?;
        let (x0, y0) = (0.04, 0.6);
        let (x3, y3) = (0.8, 0.85);
        let spoke = [
            DVec2::new(x0, y0),
            DVec2::new(0.5, 0.38),
            DVec2::new(1.0 - x0, y0),
            DVec2::new(x3, y3),
            DVec2::new(0.5, 0.6),
            DVec2::new(1.0 - x3, y3),
        ];
        fill_polygon_norm(canvas, &spoke, Color::BLACK)
    })
}

/// Three-quarter ring spinner
fn loading() -> TextureSpec {
    TextureSpec::square("loading", WORKING, 200, Background::Transparent, |canvas| {
        fill_annulus_sector(canvas, 0.3, 0.4, -PI, FRAC_PI_2, Color::rgb(0.9, 0.35, 0.35))
    })
}

/// Splash backdrop: two rows of outlined gold stars on light gray
fn powered_by() -> TextureSpec {
    let backdrop = Color::from_rgba8([192, 192, 192, 255]);
    let gold = Color::rgb(0.953, 0.784, 0.0);
    TextureSpec::square("powered-by", WORKING, 512, Background::Opaque(backdrop), move |canvas| {
        for row in 0..2 {
            for col in 0..5 {
                let center = DVec2::new(0.1 + 0.2 * col as f64, 0.3 + 0.5 * row as f64);
                for (radius, color) in [(0.09, Color::BLACK), (0.08, gold)] {
                    RadialPolygon::star(center, radius, radius / 2.0, 5).fill(canvas, color)?;
                }
            }
        }
        Ok(())
    })
}

/// Heading strip: a band with minor and major tick marks
fn compass() -> TextureSpec {
    TextureSpec::new(
        "compass",
        (3600, 400),
        (360, 40),
        Background::Opaque(Color::BLACK),
        |canvas| {
            let fg = Color::WHITE;
            fill_rect_norm(canvas, DVec2::new(0.0, 0.7), DVec2::new(1.0, 0.8), fg);
            for (ticks, half_width, top) in [(24, 0.002, 0.8), (8, 0.004, 0.6)] {
                for i in 0..=ticks {
                    let x = i as f64 / ticks as f64;
                    fill_rect_norm(
                        canvas,
                        DVec2::new(x - half_width, top),
                        DVec2::new(x + half_width, 0.95),
                        fg,
                    );
                }
            }
            Ok(())
        },
    )
}

/// Needle layout units; the working canvas is laid out on this grid
const NEEDLE_GRID: DVec2 = DVec2::new(120.0, 900.0);

/// Oval given in needle grid units
fn fill_grid_oval(canvas: &mut Canvas, origin: DVec2, size: DVec2, color: Color) {
    let extent = canvas.extent();
    let min = to_pixel(origin / NEEDLE_GRID, extent);
    let max = to_pixel((origin + size) / NEEDLE_GRID, extent);
    canvas.fill_oval(min.x, min.y, max.x - min.x, max.y - min.y, color);
}

/// Speedometer needle: tapered red shaft, red hub, white pivot
fn needle() -> TextureSpec {
    TextureSpec::new(
        "speedo_needle_2",
        (120, 900),
        (12, 90),
        Background::Transparent,
        |canvas| {
            let red = Color::rgb(0.7, 0.0, 0.0);
            fill_grid_oval(canvas, DVec2::new(0.0, 700.0), DVec2::splat(120.0), red);
            let shaft = [(40.0, 900.0), (80.0, 900.0), (70.0, 0.0), (50.0, 0.0)]
                .map(|(x, y)| DVec2::new(x, y) / NEEDLE_GRID);
            fill_polygon_norm(canvas, &shaft, red)?;
            fill_grid_oval(canvas, DVec2::new(30.0, 730.0), DVec2::splat(60.0), Color::WHITE);
            Ok(())
        },
    )
}

/// Soft white puff fading linearly to the edge
fn smoke() -> TextureSpec {
    TextureSpec::square("smoke", 64, 32, Background::Transparent, |canvas| {
        let (w, h) = (canvas.width() as f32, canvas.height() as f32);
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                let dx = (2.0 * x as f32 - w) / w;
                let dy = (2.0 * y as f32 - h) / h;
                canvas.set_pixel(x, y, Color::WHITE, radial_falloff(dx, dy));
            }
        }
        Ok(())
    })
}

/// Breakpoints of the skid mark cross-section, from center to edge
const SKIDMARK_PROFILE: [(f32, f32); 4] = [(0.0, 0.66), (0.22, 0.4), (0.36, 0.66), (0.5, 0.017)];

/// Tire track cross-section, written at native size
fn skidmark() -> TextureSpec {
    TextureSpec::new("skidmark", (64, 2), (64, 2), Background::Transparent, |canvas| {
        let ramp = AlphaRamp::new(SKIDMARK_PROFILE.to_vec())?;
        let last = (canvas.width() - 1).max(1) as f32;
        for x in 0..canvas.width() as i32 {
            let alpha = ramp.eval((x as f32 / last - 0.5).abs());
            for y in 0..canvas.height() as i32 {
                canvas.set_pixel(x, y, Color::WHITE, alpha);
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tex_gen::ResampleFilter;

    fn find(name: &str) -> TextureSpec {
        textures().into_iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_dial_layers() {
        let dial = find("tachometer_bg").render().unwrap();
        // Hub is see-through, band is black, red zone sits just below the +X rim
        assert_eq!(dial.get_pixel(1024, 1024)[3], 0);
        assert_eq!(dial.get_pixel(1024, 1024 + 800), [0, 0, 0, 255]);
        assert_eq!(dial.get_pixel(1024 + 940, 1024 + 100), Color::rgb(0.7, 0.0, 0.0).to_rgba8());
        assert_eq!(dial.get_pixel(1024, 1024 + 1003), Color::rgb(0.0, 0.3, 0.3).to_rgba8());
        assert_eq!(dial.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_button_background_and_disc() {
        let pause = find("pause").render().unwrap();
        assert_eq!(pause.get_pixel(5, 5), [255, 255, 0, 255]);
        assert_eq!(pause.get_pixel(1024, 1024), [0, 0, 0, 255]);
        // Left bar spans x 0.35..0.45
        assert_eq!(pause.get_pixel(820, 1024), [255, 255, 0, 255]);
    }

    #[test]
    fn test_power_gap_breaks_ring() {
        let off = find("power-off").render().unwrap();
        let bg = Color::rgb(0.3, 0.0, 0.0).to_rgba8();
        // Ring at the bottom, gap at the top, bar through the gap
        assert_eq!(off.get_pixel(1024, 1024 + 470), [255; 4]);
        assert_eq!(off.get_pixel(1024 - 120, 1024 - 470), bg);
        assert_eq!(off.get_pixel(1024, 1024 - 470), [255; 4]);
    }

    #[test]
    fn test_horn_parts_are_foreground() {
        let horn = find("horn-sound").render().unwrap();
        let fg = Color::rgb(0.7, 0.7, 0.0).to_rgba8();
        assert_eq!(horn.get_pixel(5, 5), [255; 4]);
        // Bore
        assert_eq!(horn.get_pixel(1500, 900), fg);
        // Bell mouth on the left
        assert_eq!(horn.get_pixel(420, 900), fg);
    }

    #[test]
    fn test_powered_by_star_outline() {
        let stars = find("powered-by").render().unwrap();
        let gold = Color::rgb(0.953, 0.784, 0.0).to_rgba8();
        // First star center at (0.1, 0.3)
        assert_eq!(stars.get_pixel(205, 614), gold);
        assert_eq!(stars.get_pixel(1024, 1024), [192, 192, 192, 255]);
    }

    #[test]
    fn test_compass_ticks() {
        let strip = find("compass").render().unwrap();
        assert_eq!(strip.get_pixel(1800, 300), [255; 4]);
        // Major tick at the midpoint reaches above the band
        assert_eq!(strip.get_pixel(1800, 250), [255; 4]);
        // Minor ticks only hang below it
        assert_eq!(strip.get_pixel(150, 250), [0, 0, 0, 255]);
        assert_eq!(strip.get_pixel(150, 350), [255; 4]);
    }

    #[test]
    fn test_needle_pivot_over_hub() {
        let needle = find("speedo_needle_2").render().unwrap();
        assert_eq!(needle.get_pixel(60, 760), [255; 4]);
        assert_eq!(needle.get_pixel(60, 100), Color::rgb(0.7, 0.0, 0.0).to_rgba8());
        assert_eq!(needle.get_pixel(5, 100)[3], 0);
    }

    #[test]
    fn test_smoke_fades_out() {
        let smoke = find("smoke").build(ResampleFilter::Area).unwrap();
        assert_eq!((smoke.width(), smoke.height()), (32, 32));
        assert!(smoke.get_pixel(16, 16)[3] > 200);
        assert_eq!(smoke.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_skidmark_profile() {
        let mark = find("skidmark").build(ResampleFilter::Area).unwrap();
        assert_eq!((mark.width(), mark.height()), (64, 2));
        assert_eq!(mark.get_pixel(0, 0), [255, 255, 255, 4]);
        assert_eq!(mark.get_pixel(0, 1), mark.get_pixel(0, 0));
        // Dip between the plateau and the tread edge
        let dip = mark.get_pixel(18, 0)[3];
        assert!(dip < mark.get_pixel(31, 0)[3]);
        assert!(dip < mark.get_pixel(9, 0)[3]);
    }
}
