//! Non-dominated sorting and crowding distance for two-objective points.
//!
//! The (cost, time) machinery behind the evolutionary solver, following
//! Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//! Algorithm: NSGA-II", IEEE Trans. Evolutionary Computation 6(2).

/// Result of non-dominated sorting over a point set.
///
/// `ranks[i]` is the Pareto rank of point `i` (0 = front); `fronts[k]`
/// lists the indices of rank `k`.
#[derive(Debug, Clone)]
pub struct FrontRanking {
    /// Pareto rank per point.
    pub ranks: Vec<usize>,
    /// Point indices grouped by front.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting of `(cost, time)` points, both minimized.
///
/// O(n²) dominance pass plus front peeling.
///
/// # Examples
///
/// ```
/// use u_itinerary::ga::rank_fronts;
///
/// let points = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]];
/// let ranking = rank_fronts(&points);
/// assert_eq!(ranking.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn rank_fronts(points: &[[f64; 2]]) -> FrontRanking {
    let n = points.len();
    if n == 0 {
        return FrontRanking {
            ranks: Vec::new(),
            fronts: Vec::new(),
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(points[i], points[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(points[j], points[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = Vec::new();
    let mut current = front_0;
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next.push(j);
                }
            }
        }
        fronts.push(current);
        current = next;
    }

    FrontRanking { ranks, fronts }
}

fn dominates(a: [f64; 2], b: [f64; 2]) -> bool {
    a[0] <= b[0] && a[1] <= b[1] && (a[0] < b[0] || a[1] < b[1])
}

/// Crowding distance per point: how isolated it is in objective space.
///
/// Boundary points of each objective get infinity; interior points
/// accumulate normalized neighbor gaps. Higher = more diverse.
pub fn crowding_distances(points: &[[f64; 2]]) -> Vec<f64> {
    let n = points.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let mut distances = vec![0.0f64; n];
    for obj in 0..2 {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            points[a][obj]
                .partial_cmp(&points[b][obj])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let range = points[order[n - 1]][obj] - points[order[0]][obj];
        if range > 0.0 {
            for k in 1..(n - 1) {
                let gap = points[order[k + 1]][obj] - points[order[k - 1]][obj];
                distances[order[k]] += gap / range;
            }
        }
    }
    distances
}
