//! Tests for photo window stride, origins and cropping

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use runway_emulator::EmulatorError;
    use runway_emulator::photo::{PhotoLayout, compute_stride, tile, tile_origins};
    use runway_emulator::placement::Point;

    const fn reference_layout(count: usize) -> PhotoLayout {
        PhotoLayout {
            count,
            width: 3040,
            height: 4056,
            y_origin: 0,
        }
    }

    // Tests the leftover width is split evenly between gaps
    // Verified by dividing by the photo count instead of gaps
    #[test]
    fn test_compute_stride() {
        assert_eq!(compute_stride(9120, 20), 480);
        assert_eq!(compute_stride(9120, 2), 9120);
        assert_eq!(compute_stride(100, 3), 50);
        assert_eq!(compute_stride(101, 3), 50);
        assert_eq!(compute_stride(100, 1), 100);
        assert_eq!(compute_stride(100, 0), 100);
        assert_eq!(compute_stride(0, 20), 0);
    }

    // Tests origins advance by the stride and the last window fits
    // Verified by stopping on the remaining count instead of the width
    #[test]
    fn test_origins_follow_stride() {
        for k in 2..=6_u32 {
            let scene_width = 3040 * k;
            let layout = reference_layout(20);
            let origins = tile_origins(scene_width, 4056, &layout).unwrap();
            let stride = compute_stride(scene_width - 3040, 20);

            for (i, origin) in origins.iter().enumerate() {
                assert_eq!(origin.x, i as u32 * stride);
                assert_eq!(origin.y, 0);
            }
            let last = origins.last().unwrap();
            assert!(last.x + 3040 <= scene_width);
            assert!(last.x + stride + 3040 > scene_width);
        }
    }

    // Tests tiling has no hidden randomness
    // Verified by shuffling origins
    #[test]
    fn test_origins_are_deterministic() {
        let layout = reference_layout(20);
        let first = tile_origins(3040 * 4, 4056, &layout).unwrap();
        let second = tile_origins(3040 * 4, 4056, &layout).unwrap();

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    // Tests a scene exactly one photo wide yields one photo, not twenty
    // Verified by emitting the requested count
    #[test]
    fn test_single_window_scene_yields_one_photo() {
        let origins = tile_origins(3040, 4056, &reference_layout(20)).unwrap();
        assert_eq!(origins, vec![Point::new(0, 0)]);
    }

    // Tests the geometric condition can also exceed the requested count
    // Verified by capping output at the requested count
    #[test]
    fn test_small_leftover_overproduces() {
        let layout = PhotoLayout {
            count: 4,
            width: 10,
            height: 5,
            y_origin: 0,
        };

        let origins = tile_origins(15, 5, &layout).unwrap();
        let xs: Vec<u32> = origins.iter().map(|p| p.x).collect();

        assert_eq!(xs, vec![0, 1, 2, 3, 4, 5]);
    }

    // Tests a single requested photo steps over the full leftover
    // Verified by using a zero stride for one photo
    #[test]
    fn test_single_count_steps_full_leftover() {
        let layout = PhotoLayout {
            count: 1,
            width: 10,
            height: 5,
            y_origin: 0,
        };

        let xs: Vec<u32> = tile_origins(30, 5, &layout)
            .unwrap()
            .iter()
            .map(|p| p.x)
            .collect();

        assert_eq!(xs, vec![0, 20]);
    }

    // Tests a scene narrower than a photo yields nothing
    // Verified by emitting a partial crop
    #[test]
    fn test_narrow_scene_yields_nothing() {
        let origins = tile_origins(3000, 4056, &reference_layout(20)).unwrap();
        assert!(origins.is_empty());
    }

    // Tests windows below the scene are rejected instead of cropped short
    // Verified by removing the vertical fit check
    #[test]
    fn test_window_below_scene_rejected() {
        let layout = PhotoLayout {
            count: 2,
            width: 10,
            height: 10,
            y_origin: 5,
        };

        assert!(matches!(
            tile_origins(40, 14, &layout),
            Err(EmulatorError::InvalidParameter {
                parameter: "photo_y",
                ..
            })
        ));
        assert_eq!(tile_origins(40, 15, &layout).unwrap().len(), 2);
    }

    // Tests zero-sized photos are rejected
    // Verified by removing the dimension check
    #[test]
    fn test_zero_photo_size_rejected() {
        let layout = PhotoLayout {
            count: 2,
            width: 0,
            height: 10,
            y_origin: 0,
        };
        assert!(tile_origins(40, 40, &layout).is_err());
    }

    // Tests crops carry the scene pixels at their origin
    // Verified by cropping from the scene origin every time
    #[test]
    fn test_tile_crops_scene() {
        let mut scene = RgbaImage::new(30, 10);
        for (x, y, pixel) in scene.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, y as u8, 0, 255]);
        }
        let layout = PhotoLayout {
            count: 3,
            width: 10,
            height: 5,
            y_origin: 2,
        };

        let photos = tile(&scene, &layout).unwrap();

        assert_eq!(photos.len(), 3);
        for (i, photo) in photos.iter().enumerate() {
            let x = i as u32 * 10;
            assert_eq!(photo.origin, Point::new(x, 2));
            assert_eq!(photo.image.dimensions(), (10, 5));
            assert_eq!(*photo.image.get_pixel(0, 0), Rgba([x as u8, 2, 0, 255]));
            assert_eq!(*photo.image.get_pixel(9, 4), Rgba([x as u8 + 9, 6, 0, 255]));
        }
    }
}
