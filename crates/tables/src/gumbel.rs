//! Finite-sample Gumbel reduced-variate statistics Yn and sigma_n.

use crate::error::TableError;

/// Expected reduced variate Yn for sample sizes 10..=100.
/// Index 0 corresponds to n = 10.
const YN: [f64; 91] = [
    0.495, 0.500, 0.504, 0.507, 0.510, 0.513, 0.516, 0.518, 0.520, 0.522, // 10..=19
    0.524, 0.525, 0.527, 0.528, 0.530, 0.531, 0.532, 0.533, 0.534, 0.535, // 20..=29
    0.536, 0.537, 0.538, 0.539, 0.540, 0.540, 0.541, 0.542, 0.542, 0.543, // 30..=39
    0.544, 0.544, 0.545, 0.545, 0.546, 0.546, 0.547, 0.547, 0.548, 0.548, // 40..=49
    0.549, 0.549, 0.549, 0.550, 0.550, 0.550, 0.551, 0.551, 0.552, 0.552, // 50..=59
    0.552, 0.552, 0.553, 0.553, 0.553, 0.554, 0.554, 0.554, 0.554, 0.555, // 60..=69
    0.555, 0.555, 0.555, 0.556, 0.556, 0.556, 0.556, 0.556, 0.557, 0.557, // 70..=79
    0.557, 0.557, 0.557, 0.557, 0.558, 0.558, 0.558, 0.558, 0.558, 0.559, // 80..=89
    0.559, 0.559, 0.559, 0.559, 0.559, 0.559, 0.560, 0.560, 0.560, 0.560, // 90..=99
    0.560, // 100
];

/// Standard deviation sigma_n of the reduced variate for sample sizes
/// 10..=100. Index 0 corresponds to n = 10.
const SIGMA_N: [f64; 91] = [
    0.950, 0.968, 0.983, 0.997, 1.010, 1.021, 1.032, 1.041, 1.049, 1.057, // 10..=19
    1.063, 1.070, 1.075, 1.081, 1.086, 1.092, 1.096, 1.100, 1.105, 1.109, // 20..=29
    1.112, 1.116, 1.119, 1.123, 1.126, 1.129, 1.131, 1.134, 1.136, 1.139, // 30..=39
    1.141, 1.144, 1.146, 1.148, 1.150, 1.152, 1.154, 1.156, 1.157, 1.159, // 40..=49
    1.161, 1.162, 1.164, 1.166, 1.167, 1.168, 1.170, 1.171, 1.172, 1.173, // 50..=59
    1.175, 1.176, 1.177, 1.178, 1.179, 1.180, 1.181, 1.182, 1.183, 1.184, // 60..=69
    1.185, 1.186, 1.187, 1.188, 1.189, 1.190, 1.191, 1.192, 1.192, 1.193, // 70..=79
    1.194, 1.195, 1.195, 1.196, 1.196, 1.197, 1.198, 1.199, 1.199, 1.200, // 80..=89
    1.201, 1.201, 1.202, 1.203, 1.203, 1.204, 1.204, 1.205, 1.206, 1.206, // 90..=99
    1.207, // 100
];

/// Yn and sigma_n pair for one sample size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YnSigma {
    /// Expected reduced variate.
    pub yn: f64,
    /// Standard deviation of the reduced variate.
    pub sigma_n: f64,
}

/// Lookup table for finite-sample Gumbel statistics, indexed by sample
/// size.
///
/// The default table covers n in 10..=100. Alternate tables can be
/// injected for tests via [`YnSigmaTable::with_entries`].
#[derive(Debug, Clone)]
pub struct YnSigmaTable {
    entries: Vec<(usize, YnSigma)>,
}

impl YnSigmaTable {
    /// Builds a table from explicit `(sample_size, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyTable`] if `entries` is empty.
    pub fn with_entries(entries: Vec<(usize, YnSigma)>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptyTable);
        }
        Ok(Self { entries })
    }

    /// Looks up Yn and sigma_n for a sample size.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::YnSigmaMiss`] if `n` is not tabulated.
    pub fn lookup(&self, n: usize) -> Result<YnSigma, TableError> {
        self.entries
            .iter()
            .find(|(size, _)| *size == n)
            .map(|(_, v)| *v)
            .ok_or(TableError::YnSigmaMiss { n })
    }
}

impl Default for YnSigmaTable {
    fn default() -> Self {
        Self {
            entries: YN
                .iter()
                .zip(SIGMA_N.iter())
                .enumerate()
                .map(|(i, (&yn, &sigma_n))| (i + 10, YnSigma { yn, sigma_n }))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_covers_10_to_100() {
        let table = YnSigmaTable::default();
        for n in 10..=100 {
            assert!(table.lookup(n).is_ok(), "missing n={n}");
        }
    }

    #[test]
    fn known_endpoints() {
        let table = YnSigmaTable::default();
        let low = table.lookup(10).unwrap();
        assert_relative_eq!(low.yn, 0.495);
        assert_relative_eq!(low.sigma_n, 0.95);
        let high = table.lookup(100).unwrap();
        assert_relative_eq!(high.yn, 0.56);
        assert_relative_eq!(high.sigma_n, 1.207);
    }

    #[test]
    fn values_nondecreasing_in_n() {
        let table = YnSigmaTable::default();
        let mut prev = YnSigma {
            yn: 0.0,
            sigma_n: 0.0,
        };
        for n in 10..=100 {
            let v = table.lookup(n).unwrap();
            assert!(v.yn >= prev.yn, "Yn decreases at n={n}");
            assert!(v.sigma_n >= prev.sigma_n, "sigma_n decreases at n={n}");
            prev = v;
        }
    }

    #[test]
    fn miss_outside_range() {
        let table = YnSigmaTable::default();
        assert_eq!(
            table.lookup(9).unwrap_err(),
            TableError::YnSigmaMiss { n: 9 }
        );
        assert!(table.lookup(101).is_err());
    }

    #[test]
    fn custom_entries() {
        let table = YnSigmaTable::with_entries(vec![(
            12,
            YnSigma {
                yn: 0.1,
                sigma_n: 0.2,
            },
        )])
        .unwrap();
        let v = table.lookup(12).unwrap();
        assert_relative_eq!(v.yn, 0.1);
        assert_relative_eq!(v.sigma_n, 0.2);
        assert!(table.lookup(13).is_err());
    }

    #[test]
    fn empty_entries_rejected() {
        assert_eq!(
            YnSigmaTable::with_entries(vec![]).unwrap_err(),
            TableError::EmptyTable
        );
    }
}
