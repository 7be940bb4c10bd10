use super::scanner::Region;
use crate::io::error::Error;
use crate::model::header::{GeneralCounts, MoleculeHeader};

const COUNT_FIELDS: [&str; 5] = [
    "atom count",
    "bond count",
    "substructure count",
    "feature count",
    "set count",
];

/// Decodes the `MOLECULE` payload.
///
/// Lines are positional: name, counts, molecule type, charge type, status
/// bits, comment. The first two are required; any later line the file stops
/// short of is left as `None`. Lines past the sixth are ignored.
pub fn decode(region: Region<'_>) -> Result<MoleculeHeader, Error> {
    let mut lines = region.numbered();

    let (_, name) = lines.next().ok_or_else(|| {
        Error::malformed_header(region.first_line(), "missing molecule name line")
    })?;
    let (counts_line_no, counts_line) = lines
        .next()
        .ok_or_else(|| Error::malformed_header(region.first_line() + 1, "missing counts line"))?;
    let counts = parse_counts(counts_line, counts_line_no)?;

    let mut rest = lines.map(|(_, line)| line.to_string());
    let mut header = MoleculeHeader::new(name, counts);
    header.mol_type = rest.next();
    header.charge_type = rest.next();
    header.status_bits = rest.next();
    header.comment = rest.next();

    Ok(header)
}

fn parse_counts(line: &str, line_no: usize) -> Result<GeneralCounts, Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() != COUNT_FIELDS.len() {
        return Err(Error::malformed_header(
            line_no,
            format!(
                "counts line must have exactly {} fields, found {}",
                COUNT_FIELDS.len(),
                tokens.len()
            ),
        ));
    }

    let mut values = [0usize; 5];
    for ((value, token), field) in values.iter_mut().zip(&tokens).zip(COUNT_FIELDS) {
        *value = token.parse::<usize>().map_err(|_| {
            Error::malformed_header(line_no, format!("invalid {field} '{token}' in counts line"))
        })?;
    }

    let [atoms, bonds, substructures, features, sets] = values;
    Ok(GeneralCounts::new(atoms, bonds, substructures, features, sets))
}
