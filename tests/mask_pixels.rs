use welcard::{
    CardImage, CardPixels, CardSurface, blit_image, draw_circular_image, draw_rounded_image,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn solid_image(rgba: [u8; 4]) -> CardImage {
    CardImage::from_rgba8(rgba.to_vec(), 1, 1).unwrap()
}

fn checkered_image() -> CardImage {
    let mut data = Vec::with_capacity(4 * 4 * 4);
    for y in 0..4u32 {
        for x in 0..4u32 {
            if (x + y) % 2 == 0 {
                data.extend_from_slice(&[220, 30, 30, 255]);
            } else {
                data.extend_from_slice(&[30, 30, 220, 255]);
            }
        }
    }
    CardImage::from_rgba8(data, 4, 4).unwrap()
}

fn px(frame: &CardPixels, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn circular_mask_keeps_interior_and_exterior_pixels() {
    // Sample points sit at least two pixels away from the circle edge so
    // antialiasing never touches them.
    let cases: [(f64, &[(u32, u32)], &[(u32, u32)]); 2] = [
        (
            10.0,
            &[(400, 150), (407, 150), (400, 143), (404, 154)],
            &[(413, 150), (400, 163), (410, 160), (0, 0), (799, 299)],
        ),
        (
            100.0,
            &[(400, 150), (497, 150), (400, 53), (466, 216)],
            &[(503, 150), (400, 253), (474, 224), (0, 0), (799, 299)],
        ),
    ];

    for (radius, inside, outside) in cases {
        let mut surface = CardSurface::new();
        blit_image(
            &mut surface,
            &solid_image(BLUE),
            kurbo::Rect::new(0.0, 0.0, 800.0, 300.0),
        );
        draw_circular_image(&mut surface, &solid_image(RED), 400.0, 150.0, radius).unwrap();
        let frame = surface.into_pixels();

        for &(x, y) in inside {
            assert_eq!(px(&frame, x, y), RED, "r={radius} inside ({x},{y})");
        }
        for &(x, y) in outside {
            assert_eq!(px(&frame, x, y), BLUE, "r={radius} outside ({x},{y})");
        }
    }
}

#[test]
fn zero_radius_rounded_draw_equals_plain_blit() {
    let image = checkered_image();

    let mut rounded = CardSurface::new();
    draw_rounded_image(&mut rounded, &image, 40.0, 30.0, 200.0, 120.0, 0.0).unwrap();

    let mut blitted = CardSurface::new();
    blit_image(&mut blitted, &image, kurbo::Rect::new(40.0, 30.0, 240.0, 150.0));

    assert_eq!(rounded.into_pixels().data, blitted.into_pixels().data);
}

#[test]
fn rounded_mask_clips_corners_and_keeps_edges() {
    let mut surface = CardSurface::new();
    draw_rounded_image(&mut surface, &solid_image(RED), 100.0, 60.0, 120.0, 120.0, 40.0).unwrap();
    let frame = surface.into_pixels();

    assert_eq!(px(&frame, 160, 120), RED);
    // Flat top edge between the corner arcs.
    assert_eq!(px(&frame, 160, 62), RED);
    // Corner squares outside the arc radius stay empty.
    assert_eq!(px(&frame, 102, 62), CLEAR);
    assert_eq!(px(&frame, 217, 177), CLEAR);
}

#[test]
fn masked_draw_leaves_no_state_behind() {
    let mut surface = CardSurface::new();
    draw_circular_image(&mut surface, &solid_image(RED), 150.0, 150.0, 50.0).unwrap();
    // A later unmasked blit must land unclipped and untransformed.
    blit_image(
        &mut surface,
        &solid_image(BLUE),
        kurbo::Rect::new(500.0, 50.0, 700.0, 200.0),
    );
    let frame = surface.into_pixels();

    assert_eq!(px(&frame, 501, 51), BLUE);
    assert_eq!(px(&frame, 699, 199), BLUE);
    assert_eq!(px(&frame, 600, 125), BLUE);
    assert_eq!(px(&frame, 150, 150), RED);
    assert_eq!(px(&frame, 790, 290), CLEAR);
}
