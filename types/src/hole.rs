use crate::to_par::ScoreToPar;

pub const DEFAULT_HOLE_COUNT: usize = 18;
pub const DEFAULT_PAR: u32 = 4;

const STANDARD_18_PARS: [u32; 18] = [4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5, 4];
const STANDARD_9_PARS: [u32; 9] = [4, 3, 5, 4, 4, 3, 4, 5, 4];

/// One scorecard row. `number` is 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
    pub score: u32,
}

impl Hole {
    pub fn to_par(&self) -> ScoreToPar {
        ScoreToPar::new(self.score.into(), self.par.into())
    }
}

/// Fresh, unscored holes for a round of `hole_count` holes.
///
/// Exactly 18 holes uses the 18-hole template; every other count uses the
/// 9-hole template, and positions past the end of the template get par 4.
/// A count of zero means the default 18.
pub fn standard_holes(hole_count: usize) -> Vec<Hole> {
    let hole_count = if hole_count == 0 {
        DEFAULT_HOLE_COUNT
    } else {
        hole_count
    };
    let template: &[u32] = if hole_count == 18 {
        &STANDARD_18_PARS
    } else {
        &STANDARD_9_PARS
    };
    (0..hole_count)
        .map(|i| Hole {
            number: i as u32 + 1,
            par: template.get(i).copied().unwrap_or(DEFAULT_PAR),
            score: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pars(holes: &[Hole]) -> Vec<u32> {
        holes.iter().map(|h| h.par).collect()
    }

    #[test]
    fn test_nine_hole_template() {
        let holes = standard_holes(9);
        assert_eq!(pars(&holes), vec![4, 3, 5, 4, 4, 3, 4, 5, 4]);
        assert_eq!(holes[0].number, 1);
        assert_eq!(holes[8].number, 9);
        assert!(holes.iter().all(|h| h.score == 0));
    }

    #[test]
    fn test_eighteen_hole_template_sums_to_72() {
        let holes = standard_holes(18);
        assert_eq!(holes.len(), 18);
        assert_eq!(holes.iter().map(|h| h.par).sum::<u32>(), 72);
    }

    #[test]
    fn test_odd_counts_fall_back_to_par_four() {
        let holes = standard_holes(12);
        assert_eq!(
            pars(&holes),
            vec![4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 4, 4]
        );

        // only exactly 18 selects the long template
        let holes = standard_holes(27);
        assert_eq!(&pars(&holes)[9..], &[4; 18][..]);
    }

    #[test]
    fn test_zero_holes_means_default() {
        assert_eq!(standard_holes(0).len(), DEFAULT_HOLE_COUNT);
    }
}
