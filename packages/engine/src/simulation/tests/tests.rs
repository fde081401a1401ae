use super::*;
use crate::domain::config::PointerSource;
use crate::render::DrawList;
use crate::systems::Particle;

fn classic(width: f32, height: f32) -> ConstellationCore {
    ConstellationCore::new(ConstellationConfig::classic(), width, height, 1.0, 7).unwrap()
}

fn drift(width: f32, height: f32) -> ConstellationCore {
    ConstellationCore::new(ConstellationConfig::drift(), width, height, 1.0, 7).unwrap()
}

fn still(x: f32, y: f32) -> Particle {
    Particle { pos: Vec2::new(x, y), vel: Vec2::ZERO, radius: 1.0, nudge: Vec2::ZERO }
}

#[test]
fn rejects_invalid_config() {
    let mut config = ConstellationConfig::classic();
    config.links.distance = config.links.cell_size + 1.0;
    assert!(ConstellationCore::new(config, 800.0, 600.0, 1.0, 1).is_err());
}

#[test]
fn full_hd_counts_stay_within_preset_bounds() {
    let core = classic(1920.0, 1080.0);
    assert!((55..=110).contains(&core.particle_count()));
    let core = drift(1920.0, 1080.0);
    assert!((60..=140).contains(&core.particle_count()));

    let core = classic(7680.0, 4320.0);
    assert_eq!(core.particle_count(), 110);
}

#[test]
fn resize_with_same_dimensions_is_stable() {
    let mut core = classic(1280.0, 720.0);
    core.resize(1024.0, 768.0, 1.0);
    let first = (core.particle_count(), core.grid().cols(), core.grid().rows());
    core.resize(1024.0, 768.0, 1.0);
    let second = (core.particle_count(), core.grid().cols(), core.grid().rows());
    assert_eq!(first, second);
    assert_eq!(core.grid().cols(), 7); // ceil(1024 / 170)
    assert_eq!(core.grid().rows(), 5); // ceil(768 / 170)
}

#[test]
fn dpr_is_capped() {
    let mut core = classic(800.0, 600.0);
    core.resize(800.0, 600.0, 3.0);
    assert_eq!(core.viewport().dpr(), 2.0);
    assert_eq!(core.viewport().backing_size(), (1600, 1200));
}

#[test]
fn steps_keep_particles_within_margin() {
    let mut core = classic(640.0, 480.0);
    for _ in 0..2_000 {
        core.step();
    }
    assert_eq!(core.frame(), 2_000);
    assert_eq!(core.stats().frame(), 2_000);
    let margin = core.config().field.wrap_margin;
    for p in core.field().particles() {
        assert!(core.viewport().contains_with_margin(p.pos, margin), "{:?}", p.pos);
    }
}

#[test]
fn grid_tracks_positions_after_step() {
    let mut core = drift(800.0, 600.0);
    core.step();
    let mut seen = vec![0u32; core.field().len()];
    for b in 0..core.grid().bucket_count() {
        for &i in core.grid().bucket(b) {
            seen[i] += 1;
            assert_eq!(core.grid().cell_index_for(core.field().particles()[i].position()), b);
        }
    }
    assert!(seen.iter().all(|&n| n == 1));
}

#[test]
fn repulsion_is_recomputed_not_accumulated() {
    let mut core = drift(800.0, 600.0);
    assert_eq!(core.config().pointer.repel_source, PointerSource::Smoothed);
    let center = core.viewport().center();
    core.field.particles_mut().push(still(center.x + 10.0, center.y));
    let probe = core.field().len() - 1;

    // Smoothed pointer starts at the center, so it is already on target.
    core.pointer_move(center.x, center.y);
    for _ in 0..30 {
        core.step();
    }
    let p = core.field().particles()[probe];
    assert_eq!(p.pos, Vec2::new(center.x + 10.0, center.y));
    assert!(p.nudge.x > 0.5 && p.nudge.x < 0.65, "{:?}", p.nudge);
    assert_eq!(p.nudge.y, 0.0);
    assert!(core.stats().nudged() >= 1);

    core.pointer_leave();
    core.step();
    assert_eq!(core.field().particles()[probe].nudge, Vec2::ZERO);
    assert_eq!(core.stats().nudged(), 0);
}

#[test]
fn classic_never_repels() {
    let mut core = classic(800.0, 600.0);
    core.pointer_move(400.0, 300.0);
    core.step();
    assert_eq!(core.stats().nudged(), 0);
    assert!(core.field().particles().iter().all(|p| p.nudge == Vec2::ZERO));
}

#[test]
fn render_reports_links_in_stats() {
    let mut core = classic(800.0, 600.0);
    core.step();
    let mut list = DrawList::new();
    let stats = core.render(&mut list);
    assert_eq!(core.stats().links_drawn(), stats.links);
    assert_eq!(list.lines().count() as u32, stats.links + stats.pointer_links);
    assert_eq!(list.circles().count(), core.field().len());
}

#[test]
fn trail_follows_config() {
    let mut core = drift(800.0, 600.0);
    assert!(core.trail().is_none());
    assert_eq!(core.render_trail(&mut DrawList::new()), 0);

    let mut core = classic(800.0, 600.0);
    core.pointer_move(100.0, 100.0);
    core.step();
    assert_eq!(core.trail().map(|t| t.len()), Some(1));
    assert_eq!(core.stats().trail_particles(), 1);
    assert_eq!(core.render_trail(&mut DrawList::new()), 1);

    core.disable_trail();
    assert!(core.trail().is_none());
    assert_eq!(core.stats().trail_particles(), 0);
}

#[test]
fn cursor_followers_track_the_pointer() {
    assert!(drift(800.0, 600.0).cursor_followers().is_none());

    let mut core = classic(800.0, 600.0);
    assert_eq!(core.cursor_followers(), Some((Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0))));
    core.pointer_move(500.0, 300.0);
    core.step();
    let (dot, ring) = core.cursor_followers().unwrap();
    // dot eases at 0.42, ring at 0.18
    assert!((dot.x - 442.0).abs() < 1e-3, "{:?}", dot);
    assert!((ring.x - 418.0).abs() < 1e-3, "{:?}", ring);
    assert_eq!((dot.y, ring.y), (300.0, 300.0));
}

#[test]
fn parallax_eases_towards_pointer_edge() {
    let mut core = classic(800.0, 600.0);
    assert_eq!(core.parallax_offset(), Vec2::ZERO);
    core.pointer_move(800.0, 300.0);
    core.step();
    let first = core.parallax_offset();
    // 0.5 * 0.08 * 40
    assert!((first.x - 1.6).abs() < 1e-4, "{:?}", first);
    assert_eq!(first.y, 0.0);
    for _ in 0..500 {
        core.step();
    }
    assert!((core.parallax_offset().x - 20.0).abs() < 1e-2);
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let mut core = classic(800.0, 600.0);
    core.pointer_move(f32::NAN, 10.0);
    assert!(!core.pointer().is_active());
}
