/// Test fixtures: representative sensor page markup from rain-flow.slco.org.
///
/// Trimmed to the parts the extractor reads. A live page lays out:
///
///   h4.mb-0 (exact class)               — current flow, max, min, in that order
///   span.badge.badge-inline (exact)     — flood level, then high-water level
///
/// Other cards on the page reuse `mb-0` alongside extra classes; those must
/// not be picked up as readouts.

/// Mill Creek running normally: 12.45 cfs against a 40 cfs high-water mark
/// and an 80 cfs flood level.
#[cfg(test)]
pub(crate) fn fixture_flowing_creek_html() -> &'static str {
    r#"<!DOCTYPE html>
<html>
  <head><title>Mill Creek @ Canyon Mouth | Rain &amp; Flow</title></head>
  <body>
    <div class="container">
      <h2 class="mb-3">Mill Creek @ Canyon Mouth</h2>
      <div class="row">
        <div class="col card"><h4 class="mb-0">12.45 <small>cfs</small></h4><p>Current Flow</p></div>
        <div class="col card"><h4 class="mb-0">30.10 <small>cfs</small></h4><p>24hr Max</p></div>
        <div class="col card"><h4 class="mb-0">3.20 <small>cfs</small></h4><p>24hr Min</p></div>
      </div>
      <ul class="list-unstyled">
        <li>Flood <span class="badge badge-inline">80.00 cfs</span></li>
        <li>High Water <span class="badge badge-inline">40.00 cfs</span></li>
      </ul>
    </div>
  </body>
</html>"#
}

/// Red Butte Creek in flood: 95.5 cfs against 45 cfs high water and a
/// 60 cfs flood level.
#[cfg(test)]
pub(crate) fn fixture_flooded_creek_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0">95.5 cfs</h4>
      <h4 class="mb-0">120.25 cfs</h4>
      <h4 class="mb-0">10.5 cfs</h4>
      <span class="badge badge-inline">Flood: 60.0 cfs</span>
      <span class="badge badge-inline">High Water: 45.0 cfs</span>
    </body></html>"#
}

/// A canal gauge with no published thresholds: readouts only.
#[cfg(test)]
pub(crate) fn fixture_no_thresholds_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0">150.75 cfs</h4>
      <h4 class="mb-0">210.00 cfs</h4>
      <h4 class="mb-0">98.10 cfs</h4>
    </body></html>"#
}

/// Only the flood badge is published; the high-water badge is missing.
#[cfg(test)]
pub(crate) fn fixture_single_badge_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0">5.5 cfs</h4>
      <h4 class="mb-0">7.5 cfs</h4>
      <h4 class="mb-0">1.5 cfs</h4>
      <span class="badge badge-inline">Flood: 11.0 cfs</span>
    </body></html>"#
}

/// Sensor in maintenance: the page renders but has no readout cards.
#[cfg(test)]
pub(crate) fn fixture_no_readouts_html() -> &'static str {
    r#"<html><body>
      <div class="alert alert-warning">This sensor is temporarily offline for maintenance.</div>
      <span class="badge badge-inline">Flood: 60.0 cfs</span>
    </body></html>"#
}

/// Page with the min card missing: the extractor must reject this layout
/// rather than misread it.
#[cfg(test)]
pub(crate) fn fixture_truncated_readouts_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0">12.45 cfs</h4>
      <h4 class="mb-0">30.10 cfs</h4>
      <span class="badge badge-inline">80.00 cfs</span>
      <span class="badge badge-inline">40.00 cfs</span>
    </body></html>"#
}

/// Readouts interleaved with look-alike elements that carry extra classes.
#[cfg(test)]
pub(crate) fn fixture_decoy_classes_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0 text-muted">999.99 cfs</h4>
      <span class="badge">888.88</span>
      <h4 class="mb-0">20.0 cfs</h4>
      <h4 class="mb-0">25.0 cfs</h4>
      <h4 class="mb-0">15.0 cfs</h4>
      <span class="badge badge-inline badge-danger">777.77</span>
      <span class="badge badge-inline">40.0 cfs</span>
      <span class="badge badge-inline">10.0 cfs</span>
    </body></html>"#
}

/// Readout cards present but the sensor reported no values.
#[cfg(test)]
pub(crate) fn fixture_blank_values_html() -> &'static str {
    r#"<html><body>
      <h4 class="mb-0">-- cfs</h4>
      <h4 class="mb-0"></h4>
      <h4 class="mb-0">N/A</h4>
      <span class="badge badge-inline">Flood: 60.0 cfs</span>
      <span class="badge badge-inline">High Water: 45.0 cfs</span>
    </body></html>"#
}
