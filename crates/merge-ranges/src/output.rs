use crate::cli::OutputFormat;
use sqd_intervals::IntervalList;
use std::io::Write;


pub fn write_intervals<W: Write>(
    mut out: W,
    list: &IntervalList,
    format: OutputFormat
) -> anyhow::Result<()>
{
    match format {
        OutputFormat::Lines => {
            for interval in list.iter() {
                writeln!(out, "{}", interval)?;
            }
        },
        OutputFormat::Comma => {
            writeln!(out, "{}", list)?;
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, list)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}


#[cfg(test)]
mod test {
    use super::write_intervals;
    use crate::cli::OutputFormat;
    use sqd_intervals::merge_intervals;
    use sqd_intervals::Interval;


    fn render(format: OutputFormat) -> String {
        let list = merge_intervals([
            Interval::new(5, 12).unwrap(),
            Interval::new(1, 4).unwrap()
        ]);
        let mut buf = Vec::new();
        write_intervals(&mut buf, &list, format).unwrap();
        String::from_utf8(buf).unwrap()
    }


    #[test]
    fn formats() {
        assert_eq!(render(OutputFormat::Lines), "1-4\n5-12\n");
        assert_eq!(render(OutputFormat::Comma), "1-4,5-12\n");
        assert_eq!(render(OutputFormat::Json), "[\"1-4\",\"5-12\"]\n");
    }

    #[test]
    fn empty_list() {
        let mut buf = Vec::new();
        write_intervals(&mut buf, &merge_intervals([]), OutputFormat::Json).unwrap();
        assert_eq!(buf, b"[]\n");

        let mut buf = Vec::new();
        write_intervals(&mut buf, &merge_intervals([]), OutputFormat::Lines).unwrap();
        assert!(buf.is_empty());
    }
}
