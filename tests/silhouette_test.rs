//! End-to-end silhouette check: the rendered torus is one solid blob.
//!
//! At the starting angles the non-blank cells must form a single
//! 8-connected component, a donut silhouette with no stray pixels.

use tui_donut::core::{Frame, FrameRenderer, TorusConfig};
use tui_donut::types::Spin;

/// Count 8-connected components over non-blank cells.
fn connected_components(frame: &Frame) -> usize {
    let size = frame.size();
    let mut seen = vec![false; size * size];
    let mut components = 0;

    for start_y in 0..size {
        for start_x in 0..size {
            let start = start_y * size + start_x;
            if seen[start] || frame.get(start_x, start_y) == Some(' ') {
                continue;
            }

            components += 1;
            let mut stack = vec![(start_x, start_y)];
            seen[start] = true;

            while let Some((x, y)) = stack.pop() {
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                        if nx < 0 || ny < 0 || nx >= size as i32 || ny >= size as i32 {
                            continue;
                        }
                        let (nx, ny) = (nx as usize, ny as usize);
                        let idx = ny * size + nx;
                        if !seen[idx] && frame.get(nx, ny) != Some(' ') {
                            seen[idx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }

    components
}

#[test]
fn reference_frame_is_one_connected_blob() {
    let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
    let frame = renderer.render(Spin::new(1.0, 1.0));

    let lit = frame.cells().iter().filter(|&&c| c != ' ').count();
    assert!(lit > 100, "expected a substantial silhouette, got {} cells", lit);
    assert_eq!(connected_components(&frame), 1);
}

#[test]
fn silhouette_stays_connected_as_it_spins() {
    let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
    for step in 0..8 {
        let spin = Spin::new(0.5 + step as f64 * 0.8, 1.3 + step as f64 * 0.45);
        let frame = renderer.render(spin);
        assert_eq!(
            connected_components(&frame),
            1,
            "stray pixels at angles ({}, {})",
            spin.a,
            spin.b
        );
    }
}

#[test]
fn component_counter_separates_distant_blobs() {
    // Sanity-check the test helper itself.
    let mut frame = Frame::new(8);
    frame.set(0, 0, '@');
    frame.set(1, 1, '@');
    frame.set(6, 6, '@');
    assert_eq!(connected_components(&frame), 2);
}
