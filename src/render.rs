// render.rs - Draw simulation state onto a 2D surface
//
// Back to front: shadow, coins, pig, particles, tears, labels.
// Only reads the scene. The surface is anything implementing `Painter`,
// which mirrors the subset of CanvasRenderingContext2d the drawing needs.

use std::f64::consts::TAU;

use crate::config::SceneConfig;
use crate::sim::{Coins, Labels, Mood, Particles, Pig, Scene, Spark, Tears};

// Palette
const SHADOW: &str = "rgba(0,0,0,0.1)";
const GOLD: &str = "#FFD700";
const GOLDENROD: &str = "#DAA520";
const GLINT: &str = "rgba(255, 255, 255, 0.8)";
const WHITE: &str = "#FFFFFF";
const LEG_SHADE: &str = "#DDDDDD";
const MOUTH: &str = "#6f1d1b";
const SNOUT: &str = "#FFD1DC";
const NOSTRIL: &str = "#8B4513";
const INK: &str = "#000";
const TEAR: &str = "#60a5fa";
const REWARD: &str = "#16a34a";

// Pig body, in unscaled units around the body center
const BODY_W: f64 = 60.0;
const BODY_H: f64 = 40.0;
const BODY_LIFT: f64 = 20.0;

/// Canvas-style immediate drawing surface
pub trait Painter {
    fn clear(&mut self, w: f64, h: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, x: f64, y: f64);

    fn set_alpha(&mut self, alpha: f64);
    fn set_fill(&mut self, style: &str);
    fn set_stroke(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_round_caps(&mut self);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);
    fn set_text_baseline(&mut self, baseline: &str);

    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64);
    /// Full ellipse, rotated by `rotation`
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64);
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

pub struct Renderer {
    pig_scale: f64,
    coin_scale: f64,
    coin_size: f64,
}

impl Renderer {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            pig_scale: config.pig_scale as f64,
            coin_scale: config.coin_scale as f64,
            coin_size: config.coin_size as f64,
        }
    }

    /// Clear and draw one frame
    pub fn draw(&self, scene: &Scene, p: &mut impl Painter) {
        if scene.width() == 0 { return; }

        p.clear(scene.width() as f64, scene.height() as f64);
        let floor = scene.floor_y() as f64;

        self.draw_shadow(scene.pig(), floor, p);
        self.draw_coins(scene.coins(), p);
        self.draw_pig(scene.pig(), floor, p);
        draw_particles(scene.particles(), p);
        draw_tears(scene.tears(), p);
        draw_labels(scene.labels(), p);
    }

    fn draw_shadow(&self, pig: &Pig, floor: f64, p: &mut impl Painter) {
        let s = self.pig_scale;
        // Slides forward with the body when it goes down
        let x = (if pig.mood == Mood::Walking { pig.x } else { pig.x + 10.0 }) as f64;

        p.set_fill(SHADOW);
        p.begin_path();
        p.ellipse(x, floor + 8.0 * s + pig.hop as f64, 30.0 * s, 5.0 * s, 0.0);
        p.fill();
    }

    fn draw_coins(&self, coins: &Coins, p: &mut impl Painter) {
        for i in 0..coins.n {
            if !coins.active[i] { continue; }

            p.save();
            p.translate(coins.x[i] as f64, coins.y[i] as f64);
            p.scale(self.coin_scale, self.coin_scale);

            p.begin_path();
            p.arc(0.0, 0.0, self.coin_size, 0.0, TAU);
            p.set_fill(GOLD);
            p.fill();
            p.set_stroke(GOLDENROD);
            p.set_line_width(2.0);
            p.stroke();

            p.begin_path();
            p.arc(-3.0, -3.0, 2.0, 0.0, TAU);
            p.set_fill(GLINT);
            p.fill();

            p.set_fill(GOLDENROD);
            p.set_font("bold 12px Arial");
            p.set_text_align("center");
            p.set_text_baseline("middle");
            p.fill_text("₱", 0.0, 1.0);

            p.restore();
        }
    }

    fn draw_pig(&self, pig: &Pig, floor: f64, p: &mut impl Painter) {
        let [back_l, back_r, front_l, front_r] = leg_angles(pig);
        let head_x = BODY_W / 2.0;

        p.save();
        p.translate(pig.x as f64, floor - BODY_LIFT + pig.hop as f64);
        p.rotate(pig.rotation as f64);
        p.scale(self.pig_scale, self.pig_scale);

        // Back legs
        p.set_fill(LEG_SHADE);
        leg(p, -10.0, BODY_H / 2.0 - 5.0, back_l);
        leg(p, 10.0, BODY_H / 2.0 - 5.0, back_r);

        // Body and head
        p.set_fill(WHITE);
        p.begin_path();
        p.ellipse(0.0, 0.0, BODY_W / 2.0, BODY_H / 2.0, 0.0);
        p.fill();
        p.begin_path();
        p.arc(head_x - 5.0, -8.0, 22.0, 0.0, TAU);
        p.fill();

        if pig.eating && pig.mood == Mood::Walking {
            // Open mouth, snout tipped up
            p.set_fill(MOUTH);
            p.begin_path();
            p.ellipse(head_x + 8.0, 2.0, 8.0, 8.0, 0.2);
            p.fill();

            p.save();
            p.translate(head_x + 12.0, -12.0);
            p.rotate(-0.4);
            p.set_fill(SNOUT);
            p.begin_path();
            p.ellipse(0.0, 0.0, 10.0, 7.0, 0.0);
            p.fill();
            p.set_fill(NOSTRIL);
            p.begin_path();
            p.arc(3.0, -1.0, 2.0, 0.0, TAU);
            p.fill();
            p.restore();
        } else {
            p.set_fill(SNOUT);
            p.begin_path();
            p.ellipse(head_x + 12.0, -5.0, 10.0, 7.0, 0.0);
            p.fill();
            p.set_fill(NOSTRIL);
            p.begin_path();
            p.arc(head_x + 15.0, -6.0, 2.0, 0.0, TAU);
            p.fill();
        }

        // Ear
        p.set_fill(WHITE);
        p.begin_path();
        p.move_to(head_x - 5.0, -20.0);
        p.line_to(head_x + 5.0, -35.0);
        p.line_to(head_x + 15.0, -18.0);
        p.fill();

        self.draw_eye(pig, head_x, p);

        // Front legs
        p.set_fill(WHITE);
        leg(p, -10.0, BODY_H / 2.0 - 2.0, front_l);
        leg(p, 10.0, BODY_H / 2.0 - 2.0, front_r);

        // Curly tail
        p.set_stroke(WHITE);
        p.set_line_width(3.0);
        p.set_round_caps();
        p.begin_path();
        p.move_to(-BODY_W / 2.0, -5.0);
        p.bezier_to(-BODY_W / 2.0 - 15.0, -15.0, -BODY_W / 2.0 - 15.0, 5.0, -BODY_W / 2.0 - 5.0, 0.0);
        p.stroke();

        p.restore();
    }

    fn draw_eye(&self, pig: &Pig, head_x: f64, p: &mut impl Painter) {
        if pig.mood.is_crying() {
            // Squeezed shut
            p.set_stroke(INK);
            p.set_line_width(2.0);
            p.begin_path();
            p.arc(head_x + 2.0, -10.0, 3.0, std::f64::consts::PI, 0.0);
            p.stroke();
        } else if pig.mood.is_tripping() {
            // Dazed X
            p.set_stroke(INK);
            p.set_line_width(2.0);
            p.begin_path();
            p.move_to(head_x, -14.0);
            p.line_to(head_x + 5.0, -9.0);
            p.move_to(head_x + 5.0, -14.0);
            p.line_to(head_x, -9.0);
            p.stroke();
        } else if pig.blinking {
            p.set_stroke(INK);
            p.set_line_width(2.0);
            p.begin_path();
            p.move_to(head_x, -12.0);
            p.line_to(head_x + 6.0, -12.0);
            p.stroke();
        } else {
            p.set_fill(INK);
            p.begin_path();
            p.arc(head_x + 2.0, -12.0, 2.5, 0.0, TAU);
            p.fill();
        }
    }
}

/// Rotation of each leg: back left, back right, front left, front right
pub fn leg_angles(pig: &Pig) -> [f64; 4] {
    match pig.mood {
        // Tucked under, front legs propping
        Mood::Sitting { .. } => [1.2, 1.0, 0.2, -0.1],
        // Splayed back, front legs flailing
        Mood::Tripping { .. } => [-1.0, -0.8, 0.8, 1.0],
        Mood::Walking => {
            let (s, c) = (pig.gait as f64).sin_cos();
            [s * 0.4, c * 0.4, -s * 0.4, -c * 0.4]
        }
    }
}

fn leg(p: &mut impl Painter, x: f64, y: f64, angle: f64) {
    p.save();
    p.translate(x, y);
    p.rotate(angle);
    p.begin_path();
    p.round_rect(-4.0, 0.0, 8.0, 18.0, 4.0);
    p.fill();
    p.restore();
}

fn draw_particles(particles: &Particles, p: &mut impl Painter) {
    for i in 0..particles.n {
        p.set_alpha(particles.life[i] as f64);
        p.set_fill(match particles.color[i] {
            Spark::Gold => GOLD,
            Spark::White => WHITE,
        });
        p.begin_path();
        p.arc(particles.x[i] as f64, particles.y[i] as f64, 2.0, 0.0, TAU);
        p.fill();
        p.set_alpha(1.0);
    }
}

fn draw_tears(tears: &Tears, p: &mut impl Painter) {
    for i in 0..tears.n {
        let (x, y) = (tears.x[i] as f64, tears.y[i] as f64);

        p.set_alpha((tears.life[i] as f64).min(1.0));
        p.set_fill(TEAR);
        p.begin_path();
        p.arc(x, y, 2.5, 0.0, TAU);
        // Pointed top
        p.move_to(x - 2.0, y);
        p.line_to(x, y - 5.0);
        p.line_to(x + 2.0, y);
        p.fill();
        p.set_alpha(1.0);
    }
}

fn draw_labels(labels: &Labels, p: &mut impl Painter) {
    for i in 0..labels.n {
        p.set_alpha(labels.opacity[i] as f64);
        p.set_fill(REWARD);
        p.set_font("bold 14px Arial");
        p.fill_text(labels.text[i], labels.x[i] as f64, labels.y[i] as f64);
        p.set_alpha(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Pointer;

    /// Records fill styles, text and stroke paths in call order
    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Recorder {
        fn fills(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| op.strip_prefix("fill_style "))
                .collect()
        }

        fn count(&self, op: &str) -> usize {
            self.ops.iter().filter(|o| o.as_str() == op).count()
        }
    }

    impl Painter for Recorder {
        fn clear(&mut self, w: f64, h: f64) { self.ops.push(format!("clear {w}x{h}")); }
        fn save(&mut self) { self.ops.push("save".into()); }
        fn restore(&mut self) { self.ops.push("restore".into()); }
        fn translate(&mut self, _: f64, _: f64) {}
        fn rotate(&mut self, _: f64) {}
        fn scale(&mut self, _: f64, _: f64) {}
        fn set_alpha(&mut self, _: f64) {}
        fn set_fill(&mut self, style: &str) { self.ops.push(format!("fill_style {style}")); }
        fn set_stroke(&mut self, style: &str) { self.ops.push(format!("stroke_style {style}")); }
        fn set_line_width(&mut self, _: f64) {}
        fn set_round_caps(&mut self) {}
        fn set_font(&mut self, _: &str) {}
        fn set_text_align(&mut self, _: &str) {}
        fn set_text_baseline(&mut self, _: &str) {}
        fn begin_path(&mut self) {}
        fn arc(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {}
        fn ellipse(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {}
        fn round_rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64) {}
        fn move_to(&mut self, _: f64, _: f64) { self.ops.push("move_to".into()); }
        fn line_to(&mut self, _: f64, _: f64) {}
        fn bezier_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) {}
        fn fill(&mut self) {}
        fn stroke(&mut self) { self.ops.push("stroke".into()); }
        fn fill_text(&mut self, text: &str, _: f64, _: f64) { self.ops.push(format!("text {text}")); }
    }

    /// Scene with one of everything on screen
    fn busy_scene() -> Scene {
        let mut scene = Scene::new(800, 600, SceneConfig::default());
        // Walk the pig on screen until it has eaten and the sparks are flying
        for _ in 0..5000 {
            if scene.tick(Pointer::default()) > 0 {
                break;
            }
        }
        scene
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let scene = busy_scene();
        assert!(scene.particles().n > 0 && scene.labels().n > 0);

        let mut rec = Recorder::default();
        Renderer::new(scene.config()).draw(&scene, &mut rec);

        assert!(rec.ops[0].starts_with("clear 800x600"));
        let fills = rec.fills();
        let expected = [SHADOW, GOLD, LEG_SHADE, SNOUT, REWARD];
        let mut at = 0;
        for style in expected {
            let found = fills[at..].iter().position(|f| *f == style);
            assert!(found.is_some(), "{style} missing after fill #{at}");
            at += found.unwrap() + 1;
        }
        // Labels are the last layer
        assert_eq!(*fills.last().unwrap(), REWARD);
        assert_eq!(rec.count("save"), rec.count("restore"));
    }

    #[test]
    fn test_only_active_coins_are_drawn() {
        let mut scene = Scene::new(800, 600, SceneConfig::default());
        scene.tick(Pointer::default());
        let active = scene.coins().active_count();

        let mut rec = Recorder::default();
        Renderer::new(scene.config()).draw(&scene, &mut rec);
        assert_eq!(rec.count("text ₱"), active);
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        let scene = Scene::new(0, 600, SceneConfig::default());
        let mut rec = Recorder::default();
        Renderer::new(scene.config()).draw(&scene, &mut rec);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn test_tripping_pig_has_x_eyes() {
        let mut scene = Scene::new(800, 600, SceneConfig::default());
        for _ in 0..800 {
            scene.tick(Pointer::default());
        }
        let pig = scene.pig();
        let spook = Pointer { x: pig.x, y: pig.center_y(scene.floor_y()) };
        scene.tick(spook);
        assert!(scene.pig().mood.is_tripping());

        let mut rec = Recorder::default();
        Renderer::new(scene.config()).draw(&scene, &mut rec);
        let eye = rec.ops.iter().position(|o| o == &format!("stroke_style {INK}")).unwrap();
        // Two strokes of the X
        assert_eq!(rec.ops[eye + 1], "move_to");
        assert_eq!(rec.ops[eye + 2], "move_to");
        assert_eq!(rec.ops[eye + 3], "stroke");
    }

    #[test]
    fn test_leg_poses_by_mood() {
        let mut rng = 1;
        let mut pig = Pig::new(0.0, &mut rng);
        assert_eq!(leg_angles(&pig), [0.0, 0.4, 0.0, -0.4]);

        pig.mood = Mood::Tripping { timer: 3 };
        assert_eq!(leg_angles(&pig), [-1.0, -0.8, 0.8, 1.0]);

        pig.mood = Mood::Sitting { timer: 3, crying: true };
        assert_eq!(leg_angles(&pig), [1.2, 1.0, 0.2, -0.1]);
    }
}
