use super::*;

fn red() -> Rgba8 {
    Rgba8::opaque(255, 0, 0)
}

fn add_aged(cache: &mut ShapeCache, age: u32) {
    cache.add(Point::new(0.0, 0.0), 1.0, red(), age, ShapeKind::Circle);
}

fn ages(cache: &ShapeCache) -> Vec<u32> {
    cache.iter().map(|s| s.age).collect()
}

#[test]
fn new_cache_is_empty_and_armed_for_init() {
    let mut cache = ShapeCache::new(0);
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(cache.take_needs_init());
    assert!(!cache.take_needs_init());
}

#[test]
fn sort_by_age_puts_oldest_first() {
    let mut cache = ShapeCache::new(0);
    for age in [2, 9, 5] {
        add_aged(&mut cache, age);
    }
    cache.sort_by_age();
    assert_eq!(ages(&cache), vec![9, 5, 2]);
}

#[test]
fn remove_expired_drains_the_front_run() {
    let mut cache = ShapeCache::new(0);
    for age in [9, 5, 2] {
        add_aged(&mut cache, age);
    }
    cache.remove_expired(5.0);
    assert_eq!(ages(&cache), vec![2]);
}

#[test]
fn remove_expired_handles_fractional_lifetimes() {
    let mut cache = ShapeCache::new(0);
    for age in [3, 2] {
        add_aged(&mut cache, age);
    }
    cache.remove_expired(2.5);
    assert_eq!(ages(&cache), vec![2]);
}

#[test]
fn next_color_cycles_round_robin_and_clear_resets_the_cursor() {
    let palette = Palette::new(vec![red(), Rgba8::opaque(0, 255, 0)]);
    let mut cache = ShapeCache::new(0);
    assert_eq!(cache.next_color(&palette), palette.color(0));
    assert_eq!(cache.next_color(&palette), palette.color(1));
    assert_eq!(cache.next_color(&palette), palette.color(0));

    cache.clear();
    assert_eq!(cache.next_color(&palette), palette.color(0));
}

#[test]
fn next_color_on_empty_palette_is_white() {
    let mut cache = ShapeCache::new(0);
    assert_eq!(cache.next_color(&Palette::default()), Rgba8::WHITE);
}

#[test]
fn reset_empties_and_rearms_initialization() {
    let mut cache = ShapeCache::new(0);
    assert!(cache.take_needs_init());
    add_aged(&mut cache, 3);
    cache.reset();
    assert!(cache.is_empty());
    assert!(cache.take_needs_init());
}

#[test]
fn uniform_aging_preserves_descending_order() {
    let mut cache = ShapeCache::new(0);
    for age in [7, 4, 0] {
        add_aged(&mut cache, age);
    }
    for shape in cache.iter_mut() {
        shape.age += 1;
    }
    assert_eq!(ages(&cache), vec![8, 5, 1]);
}
