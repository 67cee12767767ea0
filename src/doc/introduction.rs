/*!
# Introductory Tutorial for Dzen

Begin by opening a terminal and running the executable. You will get a
prompt where each line you type is resolved to a date. Type CTRL-D to
exit. For this tutorial, I'll mark lines that you type with a "`>`".
Every example pretends today is Monday, January 1st 2024, which you can
do as well by starting with `dzen --now 2024-01-01`.

<pre><code>&nbsp;> every 2 days
&nbsp;  2024-01-03
</code></pre>

A phrase is called a query. Most queries begin with the word `every`
followed by a command that says how often something happens. The answer
is always the next date it happens on, never today.

<pre><code>&nbsp;> every monday
&nbsp;  2024-01-08
</code></pre>

Words may be typed in any case. `EVERY Monday` is the same query.
Anything the language doesn't understand is reported with the line and
column where the trouble starts, followed by the line itself with the
offending part underlined.

<pre><code>&nbsp;> every 2 fortnights
&nbsp;  SyntaxError on line 1 col 9
&nbsp;    > Unexpected word fortnights
&nbsp;    > every 2 fortnights
&nbsp;              ‾‾‾‾‾‾‾‾‾‾
</code></pre>

A query may list several commands separated by commas. The earliest
date any of them names is the answer.

<pre><code>&nbsp;> every tuesday, friday
&nbsp;  2024-01-02
</code></pre>

Start `dzen` with `--ast` to see how each query was understood before
its date is printed.

<pre><code>&nbsp;> every tuesday, 3 days
&nbsp;  [EVERY: [ABSOLUTE: tuesday], [RELATIVE: 3 days]]
&nbsp;  2024-01-02
</code></pre>

The following chapters go through each kind of command.

*/
