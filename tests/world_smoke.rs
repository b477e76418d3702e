use tabletop_engine::World;

const DT: f32 = 1.0 / 60.0;

#[test]
fn full_session_place_explode_and_fall_out() {
    let mut world = World::new();

    // A small tabletop surface at the world origin
    assert!(world.anchor_added(1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.5));
    assert_eq!(world.surface_count(), 1);

    // Tap: a cube drops onto the surface and settles
    let cube = world.place_object(0.0, 0.0, 0.0);
    assert_ne!(cube, 0);
    for _ in 0..300 {
        world.step(DT);
    }
    assert_eq!(world.body_count(), 1);
    assert!(world.get_body_y(cube) > 0.0);

    // Long press next to the cube: the blast shoves it off the slab,
    // it falls past the boundary and gets cleaned up
    assert!(world.request_explosion(0.3, 0.1, 0.0));
    for _ in 0..600 {
        world.step(DT);
    }
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.out_of_bounds_removed(), 1);
    assert!(!world.body_exists(cube));

    // The surface itself is untouched by all of that
    assert_eq!(world.surface_count(), 1);
    assert!(world.surface_visible(1));
}

#[test]
fn settings_bundle_overrides_defaults_and_rejects_garbage() {
    let mut world = World::new();

    world
        .load_settings(r#"{"gravity_y": -5.0, "explosion": {"max_radius": 3.0}}"#.to_string())
        .expect("partial bundle should load");
    let echoed = world.get_settings_json();
    assert!(echoed.contains("-5.0"));
    assert!(echoed.contains("\"max_radius\":3.0"));

    assert!(world.load_settings("not json".to_string()).is_err());
    assert!(world
        .load_settings(r#"{"spawn": {"mass": 0.0}}"#.to_string())
        .is_err());
    assert!(world
        .load_settings(r#"{"explosion": {"max_radius": -1.0}}"#.to_string())
        .is_err());
}

#[test]
fn loading_settings_rebuilds_the_session() {
    let mut world = World::new();
    assert!(world.anchor_added(1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0));
    assert_ne!(world.place_object(0.0, 1.0, 0.0), 0);

    world
        .load_settings(r#"{"gravity_y": -1.0}"#.to_string())
        .expect("bundle should load");

    assert_eq!(world.surface_count(), 0);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.frame(), 0);
}

#[test]
fn render_buffers_expose_scene_state_sorted_by_id() {
    let mut world = World::new();
    assert!(world.anchor_added(7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0));
    assert!(world.anchor_added(3, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5, 0.5));

    let first = world.place_object(0.0, 1.0, 0.0);
    let second = world.place_object(0.5, 1.0, 0.5);
    assert_ne!(first, 0);
    assert_ne!(second, 0);

    let surface_count = world.extract_surfaces();
    assert_eq!(surface_count, 2);
    assert_eq!(world.surfaces_len(), 2 * world.surface_stride());
    let surfaces =
        unsafe { std::slice::from_raw_parts(world.surfaces_ptr(), world.surfaces_len()) };
    // Sorted by id: 3 first, then 7
    assert_eq!(surfaces[0] as u32, 3);
    assert_eq!(surfaces[world.surface_stride()] as u32, 7);
    // Entry layout: [id, width, depth, thickness, lx, ly, lz, visible]
    assert_eq!(surfaces[1], 0.5);
    assert_eq!(surfaces[7], 1.0);

    let body_count = world.extract_bodies();
    assert_eq!(body_count, 2);
    assert_eq!(world.bodies_len(), 2 * world.body_stride());
    let bodies = unsafe { std::slice::from_raw_parts(world.bodies_ptr(), world.bodies_len()) };
    assert_eq!(bodies[0] as u32, first.min(second));
    assert_eq!(bodies[1] as u32, u32::from(tabletop_engine::cat_movable()));

    // Spent cubes disappear from the next extract
    for _ in 0..600 {
        world.step(DT);
    }
    // Both cubes landed on the surfaces, so they are still listed
    assert_eq!(world.extract_bodies(), 2);
}

#[test]
fn hide_request_suspends_detection_for_the_session() {
    let mut world = World::new();
    assert!(world.anchor_added(1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0));
    assert!(world.surface_visible(1));

    world.request_hide_surfaces();
    world.step(DT);

    assert!(world.detection_suspended());
    assert!(!world.surface_visible(1));

    // Geometry updates keep flowing, visibility does not come back
    assert!(world.anchor_updated(1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0));
    assert_eq!(world.get_surface_width(1), 2.0);
    assert!(!world.surface_visible(1));
}
