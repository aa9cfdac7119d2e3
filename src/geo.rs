use crate::error::PricingError;

/// Spherical Earth radius in kilometres. The payout model was calibrated
/// against distances computed with this radius, so it stays fixed even
/// though 6371 km is the more common mean value.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// Great-circle distance in kilometres between one event and the reference
/// site, via the haversine formula. Inputs in degrees.
///
/// The deltas are taken as absolute values before halving. Mathematically
/// the sign is irrelevant (both terms are squared), but the operation order
/// is kept as-is so results stay bit-for-bit stable.
pub fn haversine_km(event_lat: f64, event_lon: f64, ref_lat: f64, ref_lon: f64) -> f64 {
    let ref_lat_rad = ref_lat.to_radians();
    let ref_lon_rad = ref_lon.to_radians();
    let event_lat_rad = event_lat.to_radians();
    let event_lon_rad = event_lon.to_radians();

    let delta_lat = (ref_lat_rad - event_lat_rad).abs();
    let delta_lon = (ref_lon_rad - event_lon_rad).abs();

    let h = (delta_lat / 2.0).sin().powi(2)
        + ref_lat_rad.cos() * event_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a few ulps above 1 for near-antipodal points;
    // asin would then return NaN.
    let h = h.sqrt().min(1.0);

    2.0 * EARTH_RADIUS_KM * h.asin()
}

/// Distances from each catalog event to the reference site, in catalog order.
///
/// The two slices must pair up one-to-one; a length mismatch fails rather
/// than truncating to the shorter slice.
pub fn haversine_distances(
    event_latitudes: &[f64],
    event_longitudes: &[f64],
    ref_latitude: f64,
    ref_longitude: f64,
) -> Result<Vec<f64>, PricingError> {
    if event_latitudes.len() != event_longitudes.len() {
        return Err(PricingError::LengthMismatch {
            latitudes: event_latitudes.len(),
            longitudes: event_longitudes.len(),
        });
    }

    Ok(event_latitudes
        .iter()
        .zip(event_longitudes)
        .map(|(&lat, &lon)| haversine_km(lat, lon, ref_latitude, ref_longitude))
        .collect())
}
