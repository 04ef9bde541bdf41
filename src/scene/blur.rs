//! Linear motion blur as a normalized horizontal box filter

use crate::io::error::{Result, invalid_parameter};
use image::RgbaImage;

const CHANNELS: usize = 4;

/// Mirror an out-of-range index back into `0..len` without repeating the edge
///
/// `-1` maps to `1` and `len` maps to `len - 2`, matching `dcb|abcd|cba`.
pub const fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let folded = index.rem_euclid(period);
    if folded >= len as isize {
        (period - folded) as usize
    } else {
        folded as usize
    }
}

/// Average every channel over `kernel_len` horizontally adjacent pixels
///
/// The kernel is centered, borders are reflected and results are rounded
/// to nearest. Operates in place over the whole scene.
///
/// # Errors
///
/// Returns an error if `kernel_len` is zero or even
pub fn motion_blur(scene: &mut RgbaImage, kernel_len: usize) -> Result<()> {
    if kernel_len % 2 == 0 {
        return Err(invalid_parameter(
            "kernel_len",
            &kernel_len,
            &"must be a positive odd length",
        ));
    }

    let width = scene.width() as usize;
    if width == 0 || kernel_len == 1 {
        return Ok(());
    }

    let (Ok(radius), Ok(divisor)) = (isize::try_from(kernel_len / 2), u64::try_from(kernel_len))
    else {
        return Err(invalid_parameter(
            "kernel_len",
            &kernel_len,
            &"exceeds the addressable kernel length",
        ));
    };
    let row_len = width * CHANNELS;
    let mut source = vec![0_u8; row_len];

    for row in scene.chunks_exact_mut(row_len) {
        source.copy_from_slice(row);
        let sample = |x: isize, channel: usize| -> u64 {
            let column = reflect_101(x, width);
            source
                .get(column * CHANNELS + channel)
                .copied()
                .map_or(0, u64::from)
        };

        let mut sums = [0_u64; CHANNELS];
        for (channel, sum) in sums.iter_mut().enumerate() {
            *sum = (-radius..=radius).map(|x| sample(x, channel)).sum();
        }

        for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
            for (value, sum) in pixel.iter_mut().zip(sums) {
                *value = ((sum + divisor / 2) / divisor) as u8;
            }

            // Slide the window one column to the right
            let leaving = x as isize - radius;
            let entering = x as isize + radius + 1;
            for (channel, sum) in sums.iter_mut().enumerate() {
                *sum = *sum + sample(entering, channel) - sample(leaving, channel);
            }
        }
    }

    Ok(())
}
