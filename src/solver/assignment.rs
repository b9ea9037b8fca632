//! Round-robin customer assignment.

/// Every location index except the depot, in ascending order.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::solver::customer_indices;
///
/// assert_eq!(customer_indices(4, 2), vec![0, 1, 3]);
/// ```
pub fn customer_indices(num_locations: usize, depot: usize) -> Vec<usize> {
    (0..num_locations).filter(|&i| i != depot).collect()
}

/// Distributes customers across vehicles by list position.
///
/// The customer at position `i` of `customers` goes to vehicle
/// `i % num_vehicles`. No capacity or demand balancing is done; vehicles may
/// end up with no customers. Returns one list per vehicle.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::solver::assign_round_robin;
///
/// let routes = assign_round_robin(&[1, 2, 3, 4], 2);
/// assert_eq!(routes, vec![vec![1, 3], vec![2, 4]]);
/// ```
pub fn assign_round_robin(customers: &[usize], num_vehicles: usize) -> Vec<Vec<usize>> {
    let mut assignments = vec![Vec::new(); num_vehicles];
    if num_vehicles == 0 {
        return assignments;
    }
    for (i, &customer) in customers.iter().enumerate() {
        assignments[i % num_vehicles].push(customer);
    }
    assignments
}
