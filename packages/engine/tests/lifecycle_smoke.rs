use constellation_engine::driver::{ManualScheduler, StartOutcome};
use constellation_engine::render::DrawCommand;
use constellation_engine::{AnimationDriver, ConstellationConfig, ConstellationCore, DrawList};

fn core(preset: &str) -> ConstellationCore {
    let config = ConstellationConfig::preset(preset).unwrap();
    ConstellationCore::new(config, 1280.0, 720.0, 1.5, 99).unwrap()
}

#[test]
fn drift_runs_a_minute_of_frames() {
    let mut driver = AnimationDriver::new(core("drift"), ManualScheduler::new(), Some(DrawList::new()));
    let input = driver.input();
    assert_eq!(driver.start(), Ok(StartOutcome::Running));

    for frame in 0..3_600u32 {
        // sweep the pointer across the page, leaving now and then
        if frame % 600 == 599 {
            input.leave();
        } else {
            input.move_to((frame % 1280) as f32, 360.0);
        }
        driver.scheduler_mut().fire();
        assert!(driver.on_frame());
    }

    let core = driver.core();
    assert_eq!(core.frame(), 3_600);
    let margin = core.config().field.wrap_margin;
    for p in core.field().particles() {
        assert!(core.viewport().contains_with_margin(p.pos, margin));
    }

    driver.stop();
    assert!(!driver.on_frame());
    assert_eq!(driver.core().frame(), 3_600);
}

#[test]
fn same_seed_same_field() {
    let a = core("classic");
    let b = core("classic");
    let pa: Vec<_> = a.field().positions().collect();
    let pb: Vec<_> = b.field().positions().collect();
    assert_eq!(pa, pb);
}

#[test]
fn reduced_motion_mount_leaves_surface_untouched() {
    let mut driver = AnimationDriver::new(core("classic"), ManualScheduler::new(), Some(DrawList::new()))
        .with_reduced_motion(true);
    assert_eq!(driver.start(), Ok(StartOutcome::ReducedMotion));
    assert_eq!(driver.scheduler().requested(), 0);
    assert!(driver.scheduler().pending().is_none());
}

#[test]
fn every_frame_clears_before_drawing() {
    let mut list = DrawList::new();
    let mut core = core("classic");
    core.pointer_move(640.0, 360.0);
    for _ in 0..10 {
        core.step();
        list.reset();
        let stats = core.render(&mut list);
        assert!(matches!(list.commands().first(), Some(DrawCommand::Clear { .. })));
        assert!(stats.pointer_links <= 7);
    }
}
